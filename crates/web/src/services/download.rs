// =============================================================================
// Portfolio Web - Resume Download Service
// =============================================================================
// Starts a browser-native file download through a throwaway anchor element
// =============================================================================

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::config::ResumeConfig;
use crate::services::notifications::{NotificationSink, Toast};

/// DOM failure while synthesizing the download anchor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("No document available")]
    NoDocument,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        DownloadError::Dom(format!("{:?}", value))
    }
}

/// Something that can hand a URL to the browser's download machinery.
pub trait AnchorDownloader {
    fn download(&self, href: &str, filename: &str) -> Result<(), DownloadError>;
}

/// Creates `<a href download>`, appends it to the body, clicks it once and
/// removes it again.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAnchorDownloader;

impl AnchorDownloader for DomAnchorDownloader {
    fn download(&self, href: &str, filename: &str) -> Result<(), DownloadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::NoDocument)?;
        let body = document.body().ok_or(DownloadError::NoDocument)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")?
            .dyn_into()
            .map_err(|_| DownloadError::Dom("created element is not an anchor".to_string()))?;
        anchor.set_href(href);
        anchor.set_download(filename);

        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();

        Ok(())
    }
}

/// The toast shown as soon as a resume download is requested.
pub fn download_started_toast() -> Toast {
    Toast::new(
        "Resume Download Started!",
        "Your resume download will begin shortly.",
    )
}

/// Announce the download, then kick it off.
///
/// The toast is optimistic: it goes out before the download is attempted and
/// regardless of whether the remote file is reachable.
pub fn start_resume_download<S, D>(sink: &S, downloader: &D, resume: &ResumeConfig)
where
    S: NotificationSink + ?Sized,
    D: AnchorDownloader + ?Sized,
{
    sink.notify(download_started_toast());

    match downloader.download(&resume.url, &resume.filename) {
        Ok(()) => log::info!("Resume download started: {}", resume.filename),
        Err(e) => log::warn!("Resume download could not start: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        toasts: RefCell<Vec<Toast>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    /// Records calls; optionally fails every one of them.
    struct FakeDownloader<'a> {
        sink: &'a RecordingSink,
        fail: bool,
        calls: RefCell<Vec<(String, String, usize)>>,
    }

    impl<'a> FakeDownloader<'a> {
        fn new(sink: &'a RecordingSink, fail: bool) -> Self {
            Self {
                sink,
                fail,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnchorDownloader for FakeDownloader<'_> {
        fn download(&self, href: &str, filename: &str) -> Result<(), DownloadError> {
            // Remember how many toasts were already out when the download began
            let toasts_seen = self.sink.toasts.borrow().len();
            self.calls
                .borrow_mut()
                .push((href.to_string(), filename.to_string(), toasts_seen));
            if self.fail {
                Err(DownloadError::Dom("blocked".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn resume() -> ResumeConfig {
        ResumeConfig {
            url: "https://files.example/resume".to_string(),
            filename: "resume.pdf".to_string(),
        }
    }

    #[test]
    fn test_notifies_before_downloading() {
        let sink = RecordingSink::default();
        let downloader = FakeDownloader::new(&sink, false);

        start_resume_download(&sink, &downloader, &resume());

        assert_eq!(*sink.toasts.borrow(), vec![download_started_toast()]);
        assert_eq!(
            *downloader.calls.borrow(),
            vec![(
                "https://files.example/resume".to_string(),
                "resume.pdf".to_string(),
                1
            )]
        );
    }

    #[test]
    fn test_notifies_even_when_download_fails() {
        let sink = RecordingSink::default();
        let downloader = FakeDownloader::new(&sink, true);

        start_resume_download(&sink, &downloader, &resume());

        assert_eq!(sink.toasts.borrow().len(), 1);
        assert_eq!(downloader.calls.borrow().len(), 1);
    }

    #[test]
    fn test_repeated_invocations_are_not_debounced() {
        let sink = RecordingSink::default();
        let downloader = FakeDownloader::new(&sink, false);

        for _ in 0..3 {
            start_resume_download(&sink, &downloader, &resume());
        }

        assert_eq!(sink.toasts.borrow().len(), 3);
        assert_eq!(downloader.calls.borrow().len(), 3);
    }
}
