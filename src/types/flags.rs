//! Bit flag sets shared by the host and measurement code

use bitflags::bitflags;

bitflags! {
    /// Options controlling how a sub-object reference resolves to a shape
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShapeOptions: u32 {
        /// Return the named sub-element rather than the owner's whole shape
        const NEED_SUB_ELEMENT = 0x01;
        /// Follow link objects to the shape they point at
        const RESOLVE_LINK = 0x02;
        /// Apply object placements so the shape lands in document space
        const TRANSFORM = 0x04;
    }
}

impl Default for ShapeOptions {
    fn default() -> Self {
        ShapeOptions::NEED_SUB_ELEMENT | ShapeOptions::RESOLVE_LINK | ShapeOptions::TRANSFORM
    }
}

bitflags! {
    /// Property attributes visible to editors and the recompute machinery
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PropertyFlags: u32 {
        /// Editors may not change the value
        const READ_ONLY = 0x01;
        /// Changing the value does not touch the owner
        const OUTPUT = 0x02;
    }
}

bitflags! {
    /// Transient document state consulted by change handlers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DocumentStatus: u32 {
        /// Document is being loaded from persisted state
        const RESTORING = 0x01;
        /// Objects are being removed from the document
        const REMOVING = 0x02;
        /// A recompute pass is running
        const RECOMPUTING = 0x04;
    }
}

impl DocumentStatus {
    /// Change notifications must be ignored in this state
    pub fn suppresses_changes(&self) -> bool {
        self.intersects(DocumentStatus::RESTORING | DocumentStatus::REMOVING)
    }
}
