//! Run as a CI step

use std::path::Path;

use coverage_monitor::adapters::{CloverFile, DirectoryStore, EventContext, GitHubClient};
use coverage_monitor::config::{ActionConfig, EnvInputs, FileInputs, LayeredInputs};
use coverage_monitor::core::ports::{BaselineStore, ReviewHost};
use coverage_monitor::output::OutputMode;
use coverage_monitor::workflow::{self, Collaborators};

/// Execute the run workflow with real adapters
pub fn run(config_file: Option<&Path>, scratch: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let mut inputs = LayeredInputs::new().layer(EnvInputs);
    if let Some(path) = config_file {
        inputs = inputs.layer(FileInputs::load(path)?);
    }
    let config = ActionConfig::load(&inputs)?;
    let event = EventContext::from_env()?;
    log::debug!("event: {event:?}");

    let host = event
        .owner_and_name()
        .map(|(owner, name)| GitHubClient::new(owner, name, &config.github_token));
    let store = config.baseline_store.as_ref().map(|root| DirectoryStore::new(root, scratch));

    let collaborators = Collaborators {
        documents: &CloverFile,
        host: host.as_ref().map(|h| -> &dyn ReviewHost { h }),
        store: store.as_ref().map(|s| -> &dyn BaselineStore { s }),
    };

    let result = workflow::run(&config, &event, &collaborators)?;
    result.render(mode);
    Ok(())
}
