//! Console output for device events.
use crate::config::OutputFormat;
use crate::event::DeviceEvent;
use crate::eventbus::EventListener;
use std::io::{self, Write};

/// A listener that writes every event as one line to stdout, or to any
/// other writer handed to [`ConsoleLogger::with_writer`].
pub struct ConsoleLogger<W: Write + Send = io::Stdout> {
    out: W,
    format: OutputFormat,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), OutputFormat::Text)
    }

    pub fn stdout(format: OutputFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleLogger<W> {
    pub fn with_writer(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &DeviceEvent) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{event}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write + Send> EventListener for ConsoleLogger<W> {
    fn on_event(&mut self, event: &DeviceEvent) {
        if let Err(err) = self.write_event(event) {
            tracing::warn!(error = %err, device_id = event.device_id(), "failed to write event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn events() -> Vec<DeviceEvent> {
        vec![
            DeviceEvent::Read {
                device_id: "input:0".into(),
                data: "".into(),
            },
            DeviceEvent::Processing {
                device_id: "input:0".into(),
                data: "".into(),
            },
            DeviceEvent::NothingToProcess {
                device_id: "input:0".into(),
            },
        ]
    }

    #[test]
    fn text_lines() {
        let mut logger = ConsoleLogger::with_writer(Vec::new(), OutputFormat::Text);
        for ev in events() {
            logger.on_event(&ev);
        }
        let out = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(
            out,
            "Datos leídos: \nProcesando datos: \nNo hay datos para procesar.\n"
        );
    }

    #[test]
    fn json_lines_parse_back() {
        let mut logger = ConsoleLogger::with_writer(Vec::new(), OutputFormat::Json);
        for ev in events() {
            logger.on_event(&ev);
        }
        let out = String::from_utf8(logger.into_inner()).unwrap();
        let parsed: Vec<DeviceEvent> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, events());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_does_not_panic() {
        let mut logger = ConsoleLogger::with_writer(Broken, OutputFormat::Text);
        logger.on_event(&events()[0]);
    }
}
