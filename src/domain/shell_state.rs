use super::{
    conversation::Conversation,
    selectable_list::{ListObserver, SelectableItem, SelectableList},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Quit,
    LoggedOut,
}

#[derive(Debug)]
pub struct ShellState {
    exit: Option<ShellExit>,
    conversations: Vec<Conversation>,
    list: SelectableList<i64>,
    cursor: Option<usize>,
    status: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            exit: None,
            conversations: Vec::new(),
            list: SelectableList::default(),
            cursor: None,
            status: "Loading conversations...".to_owned(),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.exit.is_none()
    }

    pub fn exit(&self) -> Option<ShellExit> {
        self.exit
    }

    pub fn stop(&mut self, exit: ShellExit) {
        self.exit = Some(exit);
    }

    pub fn list(&self) -> &SelectableList<i64> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SelectableList<i64> {
        &mut self.list
    }

    pub fn subscribe(&mut self, observer: Box<dyn ListObserver<i64>>) {
        self.list.subscribe(observer);
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Replaces the listing wholesale and repopulates the checkbox list.
    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        self.list.clear();
        self.list.add_all(
            conversations
                .iter()
                .map(|conversation| (conversation.peer_id, conversation.display_name.clone())),
            false,
        );
        self.conversations = conversations;
        self.clamp_cursor();
    }

    /// Drops the checked rows together with their conversations and returns
    /// the removed labels in removal order.
    pub fn remove_selected(&mut self) -> Vec<String> {
        let conversations = &mut self.conversations;
        let mut forget = |item: &SelectableItem<i64>| {
            conversations.retain(|conversation| conversation.peer_id != item.key);
        };

        let removed = self.list.delete_selected(Some(&mut forget));
        self.clamp_cursor();

        removed.into_iter().map(|item| item.label).collect()
    }

    /// Conversations whose rows are checked, in list order.
    pub fn selected_conversations(&self) -> Vec<Conversation> {
        self.list
            .selected_keys()
            .into_iter()
            .filter_map(|peer_id| {
                self.conversations
                    .iter()
                    .find(|conversation| conversation.peer_id == peer_id)
                    .cloned()
            })
            .collect()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn cursor_down(&mut self) {
        let Some(index) = self.cursor else {
            return;
        };

        let last_index = self.list.len().saturating_sub(1);
        self.cursor = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn cursor_up(&mut self) {
        let Some(index) = self.cursor else {
            return;
        };

        self.cursor = Some(index.saturating_sub(1));
    }

    pub fn toggle_at_cursor(&mut self) -> bool {
        match self.cursor {
            Some(index) => self.list.toggle(index),
            None => false,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    fn clamp_cursor(&mut self) {
        self.cursor = if self.list.is_empty() {
            None
        } else {
            Some(self.cursor.unwrap_or(0).min(self.list.len() - 1))
        };
    }
}
