use anyhow::Result;

use crate::{
    domain::{
        events::AppEvent,
        selectable_list::{ListObserver, SelectableItem},
        shell_state::{ShellExit, ShellState},
    },
    infra::contracts::CredentialStore,
    usecases::{
        contracts::MessagesApi,
        delete_conversations::delete_conversations,
        list_conversations::{list_conversations, ListConversationsQuery},
        logout::logout,
    },
};

use super::contracts::ShellOrchestrator;

struct SelectionLogObserver;

impl ListObserver<i64> for SelectionLogObserver {
    fn list_changed(&mut self, items: &[SelectableItem<i64>]) {
        tracing::debug!(
            rows = items.len(),
            selected = items.iter().filter(|item| item.selected).count(),
            "conversation list changed"
        );
    }
}

pub struct DefaultShellOrchestrator<A, C>
where
    A: MessagesApi,
    C: CredentialStore,
{
    state: ShellState,
    api: A,
    store: C,
    query: ListConversationsQuery,
}

impl<A, C> DefaultShellOrchestrator<A, C>
where
    A: MessagesApi,
    C: CredentialStore,
{
    pub fn new(api: A, store: C, query: ListConversationsQuery) -> Self {
        let mut state = ShellState::default();
        state.subscribe(Box::new(SelectionLogObserver));

        Self {
            state,
            api,
            store,
            query,
        }
    }

    /// Full re-fetch; the previous listing and its checkboxes are discarded.
    pub fn refresh(&mut self) -> Result<()> {
        let conversations = list_conversations(&self.api, &self.query)?;
        let count = conversations.len();
        self.state.set_conversations(conversations);
        self.state
            .set_status(format!("{count} conversation(s) loaded."));
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        let selected = self.state.selected_conversations();
        if selected.is_empty() {
            self.state
                .set_status("Nothing selected. Press space to check a conversation.");
            return Ok(());
        }

        tracing::info!(
            conversations = ?self.state.list().selected_labels(),
            "deleting checked conversations"
        );
        let report = delete_conversations(&self.api, &selected)?;
        let removed = self.state.remove_selected();
        tracing::debug!(rows = removed.len(), "checked rows removed");

        self.refresh()?;
        self.state
            .set_status(format!("Deleted {} conversation(s).", report.deleted.len()));
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        logout(&mut self.store)?;
        self.state.stop(ShellExit::LoggedOut);
        Ok(())
    }
}

impl<A, C> ShellOrchestrator for DefaultShellOrchestrator<A, C>
where
    A: MessagesApi,
    C: CredentialStore,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick | AppEvent::Resized => {}
            AppEvent::QuitRequested => self.state.stop(ShellExit::Quit),
            AppEvent::InputKey(key) => {
                if key.ctrl {
                    if key.key == "r" {
                        self.refresh()?;
                    }
                    return Ok(());
                }

                match key.key.as_str() {
                    "j" | "down" => self.state.cursor_down(),
                    "k" | "up" => self.state.cursor_up(),
                    " " | "enter" => {
                        self.state.toggle_at_cursor();
                    }
                    "a" => self.state.list_mut().select_all(),
                    "n" => self.state.list_mut().unselect_all(),
                    "d" => self.delete_selected()?,
                    "r" => self.refresh()?,
                    "L" => self.logout()?,
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
