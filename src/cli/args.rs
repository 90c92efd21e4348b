use clap::Parser;
use std::path::PathBuf;

use multiswap::ChainPlan;

use super::errors::AppError;

const EXAMPLES: &str = "\
Examples:
  # Replace the first face with face1.jpg and the second with face2.jpg:
  multiswap --faces face1.jpg face2.jpg --target group_photo.jpg

  # Run roop from its checkout (so `roop` is importable) and write to a chosen file:
  multiswap --working-dir /opt/roop --faces a.jpg --target group.png out.png";

#[derive(Parser, Debug)]
#[command(
    name = "multiswap",
    version,
    about = "Replace several faces in one image by chaining an external face-swap routine",
    after_long_help = EXAMPLES
)]
pub struct CliArgs {
    /// One or more source face images, in the order they map to faces in the target
    #[arg(long, num_args = 0.., value_name = "FACE")]
    pub faces: Option<Vec<PathBuf>>,

    /// Image containing the faces to replace
    #[arg(long, value_name = "TARGET")]
    pub target: Option<Option<PathBuf>>,

    /// Output image [default: <target>_swapped<ext>]
    pub output: Option<PathBuf>,

    /// Program implementing the swap entry point [default: python3]
    #[arg(long, env = "MULTISWAP_SWAPPER", value_name = "PROGRAM")]
    pub swapper: Option<PathBuf>,

    /// Leading argument for the swapper, repeatable [default: -c "from roop.core import run; run()"]
    #[arg(long = "swapper-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub swapper_args: Vec<String>,

    /// Working directory of the swapper process
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Directory under which the per-run temporary directory is created
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// JSON file with chain parameters; command-line options take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a JSON report of the run
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Print the planned swapper invocations without running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Checks the faces/target arguments and resolves the output path.
    pub fn to_plan(&self) -> Result<ChainPlan, AppError> {
        let (Some(faces), Some(target)) = (&self.faces, &self.target) else {
            return Err(AppError::MissingFacesOrTarget);
        };
        if faces.is_empty() {
            return Err(AppError::NoSourceFaces);
        }
        let target = target.clone().ok_or(AppError::MissingTargetPath)?;

        Ok(ChainPlan::new(faces.clone(), target, self.output.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("multiswap").chain(args.iter().copied()))
            .unwrap()
    }

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn faces_run_until_target() {
        let plan = parse(&["--faces", "f1.jpg", "f2.jpg", "--target", "group.jpg"])
            .to_plan()
            .unwrap();
        assert_eq!(plan.sources, paths(&["f1.jpg", "f2.jpg"]));
        assert_eq!(plan.target, PathBuf::from("group.jpg"));
        assert_eq!(plan.output, PathBuf::from("group_swapped.jpg"));
    }

    #[test]
    fn positional_output_after_target() {
        let plan = parse(&["--faces", "a.jpg", "--target", "g.png", "result.png"])
            .to_plan()
            .unwrap();
        assert_eq!(plan.output, PathBuf::from("result.png"));
    }

    #[test]
    fn faces_after_target_run_to_the_end() {
        let plan = parse(&["--target", "g.jpg", "--faces", "a.jpg", "b.jpg"])
            .to_plan()
            .unwrap();
        assert_eq!(plan.sources, paths(&["a.jpg", "b.jpg"]));
        assert_eq!(plan.output, PathBuf::from("g_swapped.jpg"));
    }

    #[test]
    fn missing_faces_or_target() {
        assert!(matches!(
            parse(&["--faces", "a.jpg", "b.jpg"]).to_plan(),
            Err(AppError::MissingFacesOrTarget)
        ));
        assert!(matches!(
            parse(&["--target", "g.jpg", "out.jpg"]).to_plan(),
            Err(AppError::MissingFacesOrTarget)
        ));
    }

    #[test]
    fn faces_flag_without_paths() {
        assert!(matches!(
            parse(&["--faces", "--target", "g.jpg"]).to_plan(),
            Err(AppError::NoSourceFaces)
        ));
    }

    #[test]
    fn target_flag_without_path() {
        assert!(matches!(
            parse(&["--faces", "a.jpg", "--target"]).to_plan(),
            Err(AppError::MissingTargetPath)
        ));
    }

    #[test]
    fn swapper_args_accept_leading_hyphens() {
        let args = parse(&[
            "--swapper",
            "sh",
            "--swapper-arg",
            "-c",
            "--swapper-arg",
            "exit 0",
            "--faces",
            "a.jpg",
            "--target",
            "g.jpg",
        ]);
        assert_eq!(args.swapper, Some(PathBuf::from("sh")));
        assert_eq!(args.swapper_args, vec!["-c".to_string(), "exit 0".to_string()]);
    }
}
