use super::SelectedImage;

/// A decoded-and-accepted image: the handle the view draws from and the raw
/// file that gets submitted. The two only ever travel together.
#[derive(Clone)]
pub struct AcceptedImage<H> {
    pub handle: H,
    pub file: SelectedImage,
}

impl<H> AcceptedImage<H> {
    pub fn new(handle: H, file: SelectedImage) -> Self {
        Self { handle, file }
    }
}

impl<H> std::fmt::Debug for AcceptedImage<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcceptedImage")
            .field("file", &self.file)
            .finish()
    }
}

/// Owns the one outstanding display handle. Dropping the held value is the
/// release; every path that replaces or discards it goes through here.
pub struct DisplayHandleSlot<H> {
    current: Option<AcceptedImage<H>>,
}

impl<H> Default for DisplayHandleSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> DisplayHandleSlot<H> {
    pub fn current(&self) -> Option<&AcceptedImage<H>> {
        self.current.as_ref()
    }

    /// Releases the previous image before storing the new one.
    pub fn replace(&mut self, next: AcceptedImage<H>) {
        self.release();
        log::debug!("[DISPLAY_HANDLE] storing handle for {}", next.file.file_name);
        self.current = Some(next);
    }

    /// Returns true if a handle was held and has now been released.
    pub fn release(&mut self) -> bool {
        match self.current.take() {
            Some(previous) => {
                log::debug!(
                    "[DISPLAY_HANDLE] releasing handle for {}",
                    previous.file.file_name
                );
                drop(previous);
                true
            }
            None => false,
        }
    }
}
