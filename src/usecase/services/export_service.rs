use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Png,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Png, ExportFormat::Csv];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Png => "PNG",
            ExportFormat::Csv => "CSV",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportNotice {
    Started(ExportFormat),
    Completed(ExportFormat),
}

impl ExportNotice {
    pub fn message(self) -> String {
        match self {
            ExportNotice::Started(format) => format!("Exporting as {}...", format.label()),
            ExportNotice::Completed(format) => format!("{} export complete!", format.label()),
        }
    }
}

/// Placeholder export: reports progress, writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportService {
    completion_delay: Duration,
}

impl ExportService {
    pub fn new(completion_delay: Duration) -> Self {
        Self { completion_delay }
    }

    pub async fn export(&self, format: ExportFormat, mut notify: impl FnMut(ExportNotice)) {
        tracing::info!(format = format.label(), "export requested");
        notify(ExportNotice::Started(format));
        tokio::time::sleep(self.completion_delay).await;
        tracing::info!(format = format.label(), "export finished (no file produced)");
        notify(ExportNotice::Completed(format));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn export_reports_start_then_completion_after_delay() {
        let service = ExportService::new(Duration::from_millis(1500));
        let start = Instant::now();
        let mut notices = Vec::new();

        service
            .export(ExportFormat::Csv, |notice| {
                notices.push((notice, start.elapsed()))
            })
            .await;

        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].0, ExportNotice::Started(ExportFormat::Csv));
        assert_eq!(notices[0].1, Duration::ZERO);
        assert_eq!(notices[1].0, ExportNotice::Completed(ExportFormat::Csv));
        assert!(notices[1].1 >= Duration::from_millis(1500));
        assert!(notices[1].1 < Duration::from_millis(1600));
    }

    #[test]
    fn notice_messages_use_upper_case_format() {
        assert_eq!(
            ExportNotice::Started(ExportFormat::Pdf).message(),
            "Exporting as PDF..."
        );
        assert_eq!(
            ExportNotice::Completed(ExportFormat::Png).message(),
            "PNG export complete!"
        );
    }
}
