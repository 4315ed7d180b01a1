// Вывод логов в консоль браузера

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Фабрика writer-ов: уровень события выбирает метод консоли
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Копит строку и печатает её при drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn is_error(&self) -> bool {
        self.level == Level::ERROR || self.level == Level::WARN
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if self.is_error() {
            error(line);
        } else {
            log(line);
        }
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
