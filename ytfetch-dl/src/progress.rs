//! Download progress events delivered from yt-dlp's `progress_hooks`.
//!
//! yt-dlp calls each hook with a status dict. [`ProgressEvent::from_hook`] keeps the two
//! statuses worth showing and drops the rest; the observer is invoked inline on the
//! calling thread, before yt-dlp continues.

use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};
use std::sync::Arc;

/// Progress notification for one file.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgressEvent {
    /// Bytes are being transferred
    Progress {
        /// Completion in percent, when the total size is known
        percent: Option<f64>,
        /// Instantaneous speed in bytes per second
        speed: Option<f64>,
        filename: String,
    },
    /// The file has been fully written (post-processing may follow)
    Done { filename: String },
}

/// Receives progress events while a download runs.
pub trait ProgressObserver: Send + Sync {
    fn on_event(&self, event: &ProgressEvent);
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_event(&self, _event: &ProgressEvent) {}
}

fn opt_f64(d: &Bound<'_, PyAny>, key: &str) -> Option<f64> {
    d.get_item(key).ok()?.extract::<Option<f64>>().ok()?
}

fn opt_string(d: &Bound<'_, PyAny>, key: &str) -> Option<String> {
    d.get_item(key).ok()?.extract::<Option<String>>().ok()?
}

impl ProgressEvent {
    /// Convert a yt-dlp progress dict. Returns `None` for statuses other than
    /// `downloading` and `finished`.
    pub fn from_hook(d: &Bound<'_, PyAny>) -> PyResult<Option<Self>> {
        let status: String = d.get_item("status")?.extract()?;
        let filename = opt_string(d, "filename").unwrap_or_default();

        let event = match status.as_str() {
            "downloading" => {
                let downloaded = opt_f64(d, "downloaded_bytes");
                let total = opt_f64(d, "total_bytes").or_else(|| opt_f64(d, "total_bytes_estimate"));

                let percent = match (downloaded, total) {
                    (Some(done), Some(total)) if total > 0.0 => Some(done / total * 100.0),
                    _ => None,
                };

                Self::Progress {
                    percent,
                    speed: opt_f64(d, "speed"),
                    filename,
                }
            }
            "finished" => Self::Done { filename },
            other => {
                tracing::debug!(status = other, filename, "ignored progress status");
                return Ok(None);
            }
        };

        Ok(Some(event))
    }
}

/// Wrap an observer as a Python callable suitable for `progress_hooks`.
pub(crate) fn progress_hook(
    py: Python<'_>,
    observer: Arc<dyn ProgressObserver>,
) -> PyResult<Bound<'_, PyCFunction>> {
    PyCFunction::new_closure(
        py,
        Some(c"progress_hook"),
        None,
        move |args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>| -> PyResult<()> {
            let d = args.get_item(0)?;

            if let Some(event) = ProgressEvent::from_hook(&d)? {
                observer.on_event(&event);
            }

            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<ProgressEvent>>);

    impl ProgressObserver for Recorder {
        fn on_event(&self, event: &ProgressEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn event_from(expr: &'static CStr) -> Option<ProgressEvent> {
        Python::attach(|py| {
            let d = py.eval(expr, None, None).unwrap();
            ProgressEvent::from_hook(&d).unwrap()
        })
    }

    #[test]
    fn downloading_with_total() {
        let event = event_from(
            c"{'status': 'downloading', 'filename': 'a.mp4', 'downloaded_bytes': 250, 'total_bytes': 1000, 'speed': 2048.0}",
        );

        assert_eq!(
            event,
            Some(ProgressEvent::Progress {
                percent: Some(25.0),
                speed: Some(2048.0),
                filename: "a.mp4".to_string(),
            })
        );
    }

    #[test]
    fn downloading_with_estimate_only() {
        let event = event_from(
            c"{'status': 'downloading', 'filename': 'a.mp4', 'downloaded_bytes': 50, 'total_bytes_estimate': 200, 'speed': None}",
        );

        assert!(matches!(
            event,
            Some(ProgressEvent::Progress { percent: Some(p), speed: None, .. }) if (p - 25.0).abs() < 1e-9
        ));
    }

    #[test]
    fn downloading_without_total() {
        let event = event_from(c"{'status': 'downloading', 'filename': 'a.mp4', 'downloaded_bytes': 50}");

        assert!(matches!(
            event,
            Some(ProgressEvent::Progress { percent: None, .. })
        ));
    }

    #[test]
    fn finished() {
        let event = event_from(c"{'status': 'finished', 'filename': 'a.webm'}");

        assert_eq!(
            event,
            Some(ProgressEvent::Done {
                filename: "a.webm".to_string()
            })
        );
    }

    #[test]
    fn error_status_is_ignored() {
        assert_eq!(event_from(c"{'status': 'error', 'filename': 'a.webm'}"), None);
    }

    #[test]
    fn missing_status_is_an_error() {
        Python::attach(|py| {
            let d = py.eval(c"{'filename': 'a.webm'}", None, None).unwrap();
            assert!(ProgressEvent::from_hook(&d).is_err());
        });
    }

    #[test]
    fn hook_forwards_to_observer() {
        let recorder = Arc::new(Recorder::default());

        Python::attach(|py| {
            let hook = progress_hook(py, recorder.clone()).unwrap();
            let started = py
                .eval(
                    c"{'status': 'downloading', 'filename': 'x.mp4', 'downloaded_bytes': 1, 'total_bytes': 4}",
                    None,
                    None,
                )
                .unwrap();
            let finished = py.eval(c"{'status': 'finished', 'filename': 'x.mp4'}", None, None).unwrap();

            hook.call1((started,)).unwrap();
            hook.call1((finished,)).unwrap();
        });

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ProgressEvent::Progress { percent: Some(p), .. } if (p - 25.0).abs() < 1e-9));
        assert!(matches!(&events[1], ProgressEvent::Done { filename } if filename == "x.mp4"));
    }
}
