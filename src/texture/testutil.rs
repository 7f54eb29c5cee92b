use std::cell::Cell;
use std::rc::Rc;

use super::TextureBackend;

/// Counting in-memory backend; handles are generation numbers.
#[derive(Default, Clone)]
pub(crate) struct MockBackend {
    pub(crate) created: Rc<Cell<u32>>,
    pub(crate) uploads: Rc<Cell<u32>>,
    pub(crate) deleted: Rc<Cell<u32>>,
}

impl TextureBackend for MockBackend {
    type Handle = u32;

    fn create(&self, _width: u32, _height: u32) -> u32 {
        self.created.set(self.created.get() + 1);
        self.created.get()
    }

    fn upload(&self, _handle: &u32, _width: u32, _height: u32, _pixels: &[u8]) {
        self.uploads.set(self.uploads.get() + 1);
    }

    fn delete(&self, _handle: u32) {
        self.deleted.set(self.deleted.get() + 1);
    }
}
