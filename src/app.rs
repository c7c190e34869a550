use anyhow::{bail, Result};

use crate::{
    cli::{Cli, Command},
    domain::{self, shell_state::ShellExit},
    infra::{self, credential_store::FileCredentialStore},
    ui::{self, CrosstermEventSource, StdTerminal},
    usecases::{
        self,
        auth_flow::{AuthFlow, AuthOutcome},
        bootstrap,
        context::AppContext,
        list_conversations::ListConversationsQuery,
        logout::logout,
        prompt_flow::run_prompt_flow,
        shell::DefaultShellOrchestrator,
        startup::acquire_instance_lock,
    },
    vk::{self, VkClient, VkMessages},
};

const LOGIN_CANCELLED: &str = "login cancelled before a session was established";

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        vk = vk::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let lock = acquire_instance_lock(&context.layout)?;
    tracing::debug!(path = %lock.path().display(), "instance lock acquired");

    let mut store = FileCredentialStore::new(context.layout.credentials_file());
    tracing::debug!(path = %store.path().display(), "credential store ready");
    let command = cli.command_or_default();

    match command {
        Command::Logout => {
            let outcome = logout(&mut store)?;
            tracing::info!(
                credentials_removed = outcome.credentials_removed,
                "logout completed"
            );
            println!("{}", logout_message(outcome.credentials_removed));
        }
        Command::Run | Command::Prompt => {
            let api = sign_in(&context, &mut store)?;
            let query = ListConversationsQuery::with_limit(context.config.fetch.conversation_limit);

            if command == Command::Prompt {
                let outcome = run_prompt_flow(&mut StdTerminal, &api, &query)?;
                tracing::info!(
                    listed = outcome.listed,
                    deleted = outcome.deleted.len(),
                    "prompt session finished"
                );
            } else {
                run_window(&context, api, store, query)?;
            }
        }
    }

    Ok(())
}

fn sign_in(context: &AppContext, store: &mut FileCredentialStore) -> Result<VkMessages> {
    let mut client = VkClient::new(&context.config.vk)?;

    let mut flow = AuthFlow::new();
    match flow.run(&mut StdTerminal, store, &mut client)? {
        AuthOutcome::Authenticated {
            session,
            credentials,
        } => {
            tracing::debug!(login = credentials.login(), "remote session ready");
            Ok(VkMessages::new(client, session))
        }
        AuthOutcome::Cancelled => bail!(LOGIN_CANCELLED),
    }
}

fn run_window(
    context: &AppContext,
    api: VkMessages,
    store: FileCredentialStore,
    query: ListConversationsQuery,
) -> Result<()> {
    let mut orchestrator = DefaultShellOrchestrator::new(api, store, query);
    orchestrator.refresh()?;

    let exit = ui::shell::start(context, &mut CrosstermEventSource, &mut orchestrator)?;
    if exit == ShellExit::LoggedOut {
        println!("{}", logout_message(true));
    }

    Ok(())
}

fn logout_message(credentials_removed: bool) -> &'static str {
    if credentials_removed {
        "Logged out. The saved login was removed."
    } else {
        "Nothing to log out: no saved login found."
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;
    use crate::{cli::Cli, infra::storage_layout::StorageLayout, test_support::env_lock};

    #[test]
    fn logout_message_reflects_store_state() {
        assert!(logout_message(true).contains("removed"));
        assert!(logout_message(false).contains("no saved login"));
    }

    #[test]
    fn logout_command_removes_saved_credentials() {
        let _guard = env_lock();

        let root = tempfile::tempdir().expect("temp dir");
        let xdg = root.path().join("xdg");
        fs::create_dir_all(&xdg).expect("xdg dir should be creatable");

        let old_xdg = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: env is guarded by process-wide test mutex.
        unsafe { env::set_var("XDG_CONFIG_HOME", &xdg) };

        let config_path = root.path().join("config.toml");
        fs::write(
            &config_path,
            format!(
                "[logging]\nfile = \"{}\"\n",
                root.path().join("test.log").display()
            ),
        )
        .expect("config fixture should be writable");

        let layout = StorageLayout::resolve().expect("layout");
        layout.ensure_dirs().expect("layout dirs should be created");
        fs::write(
            layout.credentials_file(),
            br#"{"login":"user","password":"pw"}"#,
        )
        .expect("credentials should be written");

        let cli = Cli {
            config: Some(config_path),
            command: Some(Command::Logout),
        };

        let result = run(cli);

        match old_xdg {
            Some(value) => {
                // SAFETY: restoring env while guard is held.
                unsafe { env::set_var("XDG_CONFIG_HOME", value) }
            }
            None => {
                // SAFETY: restoring env while guard is held.
                unsafe { env::remove_var("XDG_CONFIG_HOME") }
            }
        }

        result.expect("logout should succeed");
        assert!(!layout.credentials_file().exists());
    }
}
