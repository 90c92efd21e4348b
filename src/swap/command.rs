use std::ffi::OsString;
use std::process::Command;

use tracing::debug;

use crate::core::params::SwapperConfig;
use crate::error::{Error, Result};
use crate::swap::FaceSwapper;
use crate::types::SwapRequest;

/// Runs the configured program once per request, inheriting stdio.
#[derive(Debug, Clone)]
pub struct CommandSwapper {
    config: SwapperConfig,
}

impl CommandSwapper {
    pub fn new(config: SwapperConfig) -> Self {
        Self { config }
    }

    fn args_for(&self, request: &SwapRequest) -> Result<Vec<OsString>> {
        // A relocated working directory would change how relative paths resolve
        let request_args = if self.config.working_dir.is_some() {
            request.to_absolute()?.to_args()
        } else {
            request.to_args()
        };
        Ok(self
            .config
            .args
            .iter()
            .map(OsString::from)
            .chain(request_args)
            .collect())
    }

    pub fn command(&self, request: &SwapRequest) -> Result<Command> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(self.args_for(request)?);
        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }

    /// Shell-like rendering of the invocation, for logs and dry runs.
    pub fn command_line(&self, request: &SwapRequest) -> Result<String> {
        let mut parts = vec![quote(&self.config.program.to_string_lossy())];
        parts.extend(
            self.args_for(request)?
                .iter()
                .map(|a| quote(&a.to_string_lossy())),
        );
        Ok(parts.join(" "))
    }
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl FaceSwapper for CommandSwapper {
    fn swap(&self, request: &SwapRequest) -> Result<()> {
        debug!("Running swapper: {}", self.command_line(request)?);

        let status = self
            .command(request)?
            .status()
            .map_err(|e| Error::SwapperLaunch {
                program: self.config.program.to_string_lossy().into_owned(),
                source: e,
            })?;
        if !status.success() {
            return Err(Error::SwapFailed {
                index: request.reference_face_position,
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request(dir: &std::path::Path) -> SwapRequest {
        SwapRequest {
            source: dir.join("face.jpg"),
            target: dir.join("group.jpg"),
            output: dir.join("temp_output_0.jpg"),
            reference_face_position: 0,
        }
    }

    fn sh(script: &str) -> SwapperConfig {
        SwapperConfig {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.to_string(), "swap".to_string()],
            working_dir: None,
        }
    }

    #[test]
    fn command_line_puts_leading_args_before_request_flags() {
        let swapper = CommandSwapper::new(SwapperConfig::default());
        let req = SwapRequest {
            source: PathBuf::from("my face.jpg"),
            target: PathBuf::from("group.jpg"),
            output: PathBuf::from("/tmp/temp_output_2.jpg"),
            reference_face_position: 2,
        };
        assert_eq!(
            swapper.command_line(&req).unwrap(),
            "python3 -c 'from roop.core import run; run()' --source 'my face.jpg' \
             --target group.jpg --output /tmp/temp_output_2.jpg --reference-face-position 2"
        );
    }

    #[test]
    fn working_dir_makes_paths_absolute() {
        let swapper = CommandSwapper::new(SwapperConfig {
            working_dir: Some(PathBuf::from("/opt/roop")),
            ..SwapperConfig::default()
        });
        let req = SwapRequest {
            source: PathBuf::from("face.jpg"),
            target: PathBuf::from("group.jpg"),
            output: PathBuf::from("out.jpg"),
            reference_face_position: 0,
        };
        let args = swapper.args_for(&req).unwrap();
        assert_eq!(args[0], OsString::from("-c"));
        assert_eq!(args[2], OsString::from("--source"));
        assert!(PathBuf::from(&args[3]).is_absolute());
        assert!(PathBuf::from(&args[5]).is_absolute());
        assert!(PathBuf::from(&args[7]).is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn runs_program_with_request_flags() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path());
        std::fs::write(&req.target, b"group").unwrap();

        // $4 is the target and $6 the output
        let swapper = CommandSwapper::new(sh(r#"cp "$4" "$6""#));
        swapper.swap(&req).unwrap();
        assert_eq!(std::fs::read(&req.output).unwrap(), b"group");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_swap_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(dir.path());
        req.reference_face_position = 3;

        let swapper = CommandSwapper::new(sh("exit 7"));
        match swapper.swap(&req) {
            Err(Error::SwapFailed { index, status }) => {
                assert_eq!(index, 3);
                assert_eq!(status.code(), Some(7));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let swapper = CommandSwapper::new(SwapperConfig {
            program: dir.path().join("no-such-swapper"),
            args: Vec::new(),
            working_dir: None,
        });
        assert!(matches!(
            swapper.swap(&request(dir.path())),
            Err(Error::SwapperLaunch { .. })
        ));
    }
}
