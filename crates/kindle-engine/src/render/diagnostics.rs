use std::fmt;

/// Outcome of the compilation-info request itself, not of the shader.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompilationStatus {
    Success,
    Error,
    DeviceLost,
    Unknown,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One compiler message. Positions are 1-based; 0 when the compiler gave none.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationMessage {
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompilationReport {
    pub status: CompilationStatus,
    pub messages: Vec<CompilationMessage>,
}

impl CompilationReport {
    pub fn first_message(&self) -> Option<&CompilationMessage> {
        self.messages.first()
    }

    /// Most severe message, if any.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.messages.iter().map(|m| m.severity).max()
    }

    /// Human-readable summary: status, message count, and the first message
    /// with its position when there is one.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("compilation info request: {}", self.status),
            format!("info message count: {}", self.messages.len()),
        ];

        if let Some(first) = self.first_message() {
            lines.push(first.to_string());
        }

        lines
    }

    /// Logs the summary. Advisory only; never fails.
    pub fn log(&self) {
        let level = match self.worst_severity() {
            Some(Severity::Error) => log::Level::Error,
            Some(Severity::Warning) => log::Level::Warn,
            _ if self.status != CompilationStatus::Success => log::Level::Warn,
            _ => log::Level::Info,
        };

        for line in self.summary() {
            log::log!(level, "{line}");
        }
    }
}

impl From<&wgpu::CompilationInfo> for CompilationReport {
    fn from(info: &wgpu::CompilationInfo) -> Self {
        let messages = info
            .messages
            .iter()
            .map(|m| {
                let (line, column) = m
                    .location
                    .as_ref()
                    .map(|loc| (loc.line_number, loc.line_position))
                    .unwrap_or((0, 0));

                CompilationMessage {
                    line,
                    column,
                    severity: match m.message_type {
                        wgpu::CompilationMessageType::Error => Severity::Error,
                        wgpu::CompilationMessageType::Warning => Severity::Warning,
                        wgpu::CompilationMessageType::Info => Severity::Info,
                    },
                    text: m.message.clone(),
                }
            })
            .collect();

        // wgpu resolves the request locally; it cannot fail the way a remote
        // request can, so the status is always success here.
        Self {
            status: CompilationStatus::Success,
            messages,
        }
    }
}

impl fmt::Display for CompilationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompilationStatus::Success => "success",
            CompilationStatus::Error => "error",
            CompilationStatus::DeviceLost => "device lost",
            CompilationStatus::Unknown => "unknown",
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

impl fmt::Display for CompilationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {} pos {}] {}: {}",
            self.line, self.column, self.severity, self.text
        )
    }
}
