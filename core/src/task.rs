// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct TaskSlot<H> {
    handle: Option<H>,
}

impl<H> TaskSlot<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn start<F>(&mut self, make: F)
    where
        F: FnOnce() -> H,
    {
        self.cancel();
        self.handle = Some(make());
    }

    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for TaskSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
