use crate::error::ProbeError;

pub const DEFAULT_PROGRAM: &str = "ffprobe";

// Quiet logs, container and stream sections, as json
const PROBE_ARGS: [&str; 6] = [
    "-v",
    "quiet",
    "-show_format",
    "-show_streams",
    "-print_format",
    "json",
];

/// Runs an ffprobe compatible program and hands back its json report
pub struct Prober {
    program: std::ffi::OsString,
}

impl Prober {
    pub fn new(program: impl Into<std::ffi::OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn command(&self, path: &std::path::Path) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(PROBE_ARGS).arg(path);
        command
    }

    /// Blocks until the prober exits, no timeout
    pub fn probe(&self, path: &std::path::Path) -> Result<String, ProbeError> {
        let program = self.program.to_string_lossy().to_string();

        debug!("Running {:?}", self.command(path));

        let output = self
            .command(path)
            .output()
            .map_err(|e| ProbeError::Launch {
                program: program.clone(),
                why: e,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        trace!("Prober wrote {} bytes", output.stdout.len());

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
