#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Default display duration for toasts without an explicit one.
pub const DEFAULT_DURATION_MS: u32 = 4000;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Optional settings for an error toast.
///
/// A stable `id` deduplicates: re-emitting with the same id replaces the
/// active toast for that id instead of stacking a second one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToastOptions {
    pub id: Option<&'static str>,
    pub duration_ms: Option<u32>,
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub handle: u64,
    pub kind: ToastKind,
    pub message: String,
    pub id: Option<&'static str>,
    pub duration_ms: u32,
}

/// Process-wide toast queue. Fire-and-forget: callers get no
/// acknowledgement beyond the handle used for timed dismissal.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_handle: u64,
}

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into(), ToastOptions::default())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into(), ToastOptions::default())
    }

    pub fn error_with(&mut self, message: impl Into<String>, options: ToastOptions) -> u64 {
        self.push(ToastKind::Error, message.into(), options)
    }

    pub fn dismiss(&mut self, handle: u64) {
        self.toasts.retain(|t| t.handle != handle);
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    fn push(&mut self, kind: ToastKind, message: String, options: ToastOptions) -> u64 {
        if let Some(id) = options.id {
            self.toasts.retain(|t| t.id != Some(id));
        }
        let handle = self.next_handle;
        self.next_handle += 1;
        self.toasts.push(Toast {
            handle,
            kind,
            message,
            id: options.id,
            duration_ms: options.duration_ms.unwrap_or(DEFAULT_DURATION_MS),
        });
        handle
    }
}
