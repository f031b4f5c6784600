use derive_new::new;
use std::io;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Leading bytes of every PDF file.
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to start extraction command `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while talking to the extraction command")]
    Io(#[from] io::Error),
    #[error("extraction command `{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("document is a PDF but no extraction command is configured")]
    NoExtractor,
    #[error("extraction command is empty")]
    EmptyCommand,
}

/// Turns the raw bytes of a document into the plain text that gets compared.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> impl Future<Output = Result<String, ExtractError>> + Send;
}

/// Reads documents that already are text, such as Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Extractor;

impl TextExtractor for Utf8Extractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
    }
}

/// Pipes the document into an external program and reads text back from its
/// stdout, e.g. `pdftotext - -`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommandExtractor {
    #[new(into)]
    program: String,
    args: Vec<String>,
}

impl CommandExtractor {
    /// Splits a command line on whitespace; the first word names the program.
    pub fn parse(command_line: &str) -> Result<Self, ExtractError> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next().ok_or(ExtractError::EmptyCommand)?;
        Ok(CommandExtractor::new(program, words.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl TextExtractor for CommandExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        tracing::info!(
            program = %self.program,
            bytes = bytes.len(),
            "running text extraction command"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExtractError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(bytes).await {
                // the program may stop reading early, its exit status tells the rest
                Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                result => result,
            }
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            return Err(ExtractError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed?;

        let text = std::str::from_utf8(&output.stdout)?.to_string();
        tracing::debug!(program = %self.program, chars = text.len(), "extraction finished");
        Ok(text)
    }
}

/// Routes each document by content: PDFs go to the configured command,
/// everything else is read as UTF-8 text.
#[derive(Debug, Clone, Default, new)]
pub struct DocumentExtractor {
    pdf: Option<CommandExtractor>,
}

impl DocumentExtractor {
    pub fn is_pdf(bytes: &[u8]) -> bool {
        bytes.starts_with(PDF_MAGIC)
    }
}

impl TextExtractor for DocumentExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        if !Self::is_pdf(bytes) {
            return Utf8Extractor.extract(bytes).await;
        }

        match &self.pdf {
            Some(command) => command.extract(bytes).await,
            None => Err(ExtractError::NoExtractor),
        }
    }
}
