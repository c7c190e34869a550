use std::path::Path;

use crate::{
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let adapter = FileConfigAdapter::new(config_path);
    let context = build_context(&adapter, StorageLayout::resolve()?)?;
    context.layout.ensure_dirs()?;

    let log_file = context
        .config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| context.layout.default_log_file());
    let guard = infra::logging::init(&context.config.logging, &log_file)?;

    tracing::info!(
        config = %adapter.path().display(),
        storage = %context.layout.config_dir.display(),
        "bootstrap complete"
    );

    Ok(context.with_log_guard(guard))
}

fn build_context(
    adapter: &dyn ConfigAdapter,
    layout: StorageLayout,
) -> Result<AppContext, AppError> {
    let config = adapter.load().map_err(AppError::Other)?;
    Ok(AppContext::new(config, layout))
}
