/// What `pagehide` means for the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Page entered the back/forward cache and may be shown again.
    Suspend,
    /// Page is being unloaded; the loop will never run again.
    Teardown,
}

impl PageHide {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Suspend
        } else {
            PageHide::Teardown
        }
    }
}
