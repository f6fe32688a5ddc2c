use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    cli::{
        args::{ApplyCommand, CommonArgs},
        console::ConsoleSink,
        exit_status::ExitStatus,
    },
    config::{Config, ConfigLoadResult, load_config},
    core::{
        HostSnapshot, MemoryHost, MergeStrategy, Overlay, OverlayContext, log::LogSink,
    },
};

pub fn apply(cmd: ApplyCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let mod_root = match &cmd.common.mod_root {
        Some(path) => cwd.join(path),
        None => cwd.clone(),
    };

    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(&mod_root)?;
    apply_overrides(&mut config, &cmd.common);
    if cmd.deferred {
        config.merge_strategy = MergeStrategy::Deferred;
    }
    let options = config.to_options(&mod_root)?;

    let sink = ConsoleSink::new(cmd.common.verbose);
    if from_file {
        sink.debug("using configuration from .overlayrc.json");
    }

    let snapshot_path = cwd.join(&cmd.snapshot);
    let mut host = MemoryHost::from_snapshot(HostSnapshot::load(&snapshot_path)?);

    let report = Overlay::new(options).run(OverlayContext {
        host: &mut host,
        log: &sink,
    });

    if let Some(output) = cmd.output {
        let output: PathBuf = cwd.join(output);
        host.into_snapshot().save(&output)?;
        sink.info(&format!("Wrote {}", output.display()));
    }

    Ok(ExitStatus::from_report(&report))
}

fn apply_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(root) = &args.locales_root {
        config.locales_root = root.clone();
    }
    if let Some(reference) = &args.reference_locale {
        config.reference_locale = reference.clone();
    }
    if !args.target_locales.is_empty() {
        config.target_locales = args.target_locales.clone();
    }
}
