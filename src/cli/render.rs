//! Render command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::domain::DEFAULT_CONFIG_NAME;
use crate::output::write_all;
use crate::render::{render_str, RenderContext, RenderTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetSelection {
    Nginx,
    Haproxy,
    All,
}

impl TargetSelection {
    fn targets(self) -> Vec<RenderTarget> {
        match self {
            TargetSelection::Nginx => vec![RenderTarget::Nginx],
            TargetSelection::Haproxy => vec![RenderTarget::Haproxy],
            TargetSelection::All => RenderTarget::ALL.to_vec(),
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Run directory holding config/<CONFIG_NAME>.json
    #[arg(value_name = "RUN_DIR")]
    pub run_dir: PathBuf,

    /// Config to load from RUN_DIR/config
    #[arg(value_name = "CONFIG_NAME", default_value = DEFAULT_CONFIG_NAME)]
    pub config_name: String,

    /// Which file(s) to generate
    #[arg(short, long, value_enum, default_value_t = TargetSelection::All)]
    pub target: TargetSelection,

    /// Directory with nginx-template.conf / haproxy-template.cfg (defaults to built-in templates)
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Where to write the generated files (defaults to RUN_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let config = load_config(&args.run_dir, &args.config_name)?;
    let context = RenderContext::from_config(&config);
    let output_dir = args.output_dir.clone().unwrap_or_else(|| args.run_dir.clone());

    // All targets render before any file is written.
    let mut outputs = Vec::new();
    for target in args.target.targets() {
        let template = load_template(target, args.template_dir.as_deref())?;
        let rendered = render_str(&template, &context, target)
            .with_context(|| format!("Failed rendering {} config", target.name()))?;
        outputs.push((output_dir.join(target.output_file_name()), rendered));
    }

    write_all(&outputs)?;
    for (path, _) in &outputs {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn load_template(target: RenderTarget, template_dir: Option<&Path>) -> Result<Cow<'static, str>> {
    let Some(dir) = template_dir else {
        return Ok(Cow::Borrowed(target.builtin_template()));
    };
    let path = dir.join(target.template_file_name());
    tracing::debug!("Using {} template {}", target.name(), path.display());
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed reading template: {}", path.display()))?;
    Ok(Cow::Owned(text))
}
