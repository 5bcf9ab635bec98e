//! Argument construction for the rendering tool.

use std::ffi::OsString;
use std::path::Path;

/// The external program and the output format requested from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    /// Program name or path; resolved through `PATH` by the runner.
    pub program: String,
    /// Value for the `-T` option (`svgz` = gzip-compressed SVG).
    pub format: String,
}

impl Default for RenderCommand {
    fn default() -> Self {
        Self {
            program: "dot".to_owned(),
            format: "svgz".to_owned(),
        }
    }
}

impl RenderCommand {
    /// `-T<format> -o <output> <input>`
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            OsString::from(format!("-T{}", self.format)),
            OsString::from("-o"),
            output.as_os_str().to_owned(),
            input.as_os_str().to_owned(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_asks_dot_for_svgz() {
        let cmd = RenderCommand::default();
        assert_eq!(cmd.program, "dot");

        let args = cmd.args(Path::new("dir/a.dot"), Path::new("dir/a.svg"));
        assert_eq!(args, vec!["-Tsvgz", "-o", "dir/a.svg", "dir/a.dot"]);
    }

    #[test]
    fn custom_format_is_forwarded() {
        let cmd = RenderCommand { program: "/opt/graphviz/bin/dot".into(), format: "png".into() };
        let args = cmd.args(Path::new("g.dot"), Path::new("g.png"));
        assert_eq!(args[0], "-Tpng");
    }
}
