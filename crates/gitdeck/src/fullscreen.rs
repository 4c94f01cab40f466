use eframe::egui;

use crate::error::FullscreenError;

/// Something that can be asked to enter or leave fullscreen.
///
/// A successful request only means it was accepted; the actual mode change is
/// observed later through [`Fullscreen::sync`].
pub trait FullscreenBackend {
    fn request(&mut self, fullscreen: bool) -> Result<(), FullscreenError>;
}

/// Sends viewport commands to the eframe window.
pub struct ViewportBackend<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ViewportBackend<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl FullscreenBackend for ViewportBackend<'_> {
    fn request(&mut self, fullscreen: bool) -> Result<(), FullscreenError> {
        // Windows that never report a fullscreen state cannot honour the command.
        if self.ctx.input(|i| i.viewport().fullscreen.is_none()) {
            return Err(FullscreenError::Unsupported);
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        Ok(())
    }
}

/// Mirror of the window's fullscreen state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fullscreen {
    active: bool,
}

impl Fullscreen {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Request the opposite of the current mode. A refused request is logged
    /// and leaves the flag as it was.
    pub fn toggle(&self, backend: &mut impl FullscreenBackend) -> Result<(), FullscreenError> {
        let want = !self.active;
        backend.request(want).inspect_err(|err| {
            tracing::error!(
                "Error attempting to {} fullscreen mode: {err}",
                if want { "enable" } else { "exit" }
            );
        })
    }

    /// Adopt the state the window reports. Returns whether it changed.
    pub fn sync(&mut self, reported: Option<bool>) -> bool {
        match reported {
            Some(active) if active != self.active => {
                tracing::debug!(active, "fullscreen changed");
                self.active = active;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grants or refuses requests and records them, reporting back like a window would.
    struct FakeWindow {
        fullscreen: bool,
        deny: bool,
        requests: Vec<bool>,
    }

    impl FakeWindow {
        fn new(deny: bool) -> Self {
            Self {
                fullscreen: false,
                deny,
                requests: Vec::new(),
            }
        }
    }

    impl FullscreenBackend for FakeWindow {
        fn request(&mut self, fullscreen: bool) -> Result<(), FullscreenError> {
            self.requests.push(fullscreen);
            if self.deny {
                return Err(FullscreenError::Denied("permission check failed".into()));
            }
            self.fullscreen = fullscreen;
            Ok(())
        }
    }

    #[test]
    fn toggling_twice_restores_the_flag() {
        let mut window = FakeWindow::new(false);
        let mut state = Fullscreen::default();

        state.toggle(&mut window).unwrap();
        assert!(!state.is_active(), "flag waits for the window to report");
        assert!(state.sync(Some(window.fullscreen)));
        assert!(state.is_active());

        state.toggle(&mut window).unwrap();
        state.sync(Some(window.fullscreen));
        assert!(!state.is_active());
        assert_eq!(window.requests, vec![true, false]);
    }

    #[test]
    fn denied_request_leaves_flag_unchanged() {
        let mut window = FakeWindow::new(true);
        let mut state = Fullscreen::default();

        let err = state.toggle(&mut window).unwrap_err();
        assert!(matches!(err, FullscreenError::Denied(_)));
        assert!(!state.sync(Some(window.fullscreen)));
        assert!(!state.is_active());
    }

    #[test]
    fn unknown_report_is_ignored() {
        let mut state = Fullscreen::new(true);
        assert!(!state.sync(None));
        assert!(state.is_active());
    }
}
