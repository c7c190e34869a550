use std::io;

use thiserror::Error;

use crate::usecases::{
    contracts::{MessagesApi, PromptTerminal},
    delete_conversations::{delete_conversations, DeleteConversationsError},
    list_conversations::{list_conversations, ListConversationsError, ListConversationsQuery},
};

const SELECT_ALL_TOKEN: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("`{token}` is not a conversation number")]
    InvalidToken { token: String },
    #[error("conversation number {number} is out of range 1..={total}")]
    OutOfRange { number: usize, total: usize },
}

#[derive(Debug, Error)]
pub enum PromptFlowError {
    #[error("failed to list conversations: {0}")]
    List(#[from] ListConversationsError),
    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Delete(#[from] DeleteConversationsError),
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub listed: usize,
    pub deleted: Vec<i64>,
}

/// Turns the user's answer into 0-based positions.
///
/// Blank selects nothing, `ALL` selects everything, otherwise the answer is a
/// whitespace-separated list of 1-based numbers. Repeated numbers count once.
pub fn parse_selection(input: &str, total: usize) -> Result<Vec<usize>, SelectionError> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(Vec::new());
    }

    if input == SELECT_ALL_TOKEN {
        return Ok((0..total).collect());
    }

    let mut positions = Vec::new();
    for token in input.split_whitespace() {
        let number: usize = token.parse().map_err(|_| SelectionError::InvalidToken {
            token: token.to_owned(),
        })?;

        if number == 0 || number > total {
            return Err(SelectionError::OutOfRange { number, total });
        }

        let position = number - 1;
        if !positions.contains(&position) {
            positions.push(position);
        }
    }

    Ok(positions)
}

/// Line-oriented front end: list, ask once, delete the chosen conversations.
pub fn run_prompt_flow(
    terminal: &mut dyn PromptTerminal,
    api: &dyn MessagesApi,
    query: &ListConversationsQuery,
) -> Result<PromptOutcome, PromptFlowError> {
    let conversations = list_conversations(api, query)?;

    if conversations.is_empty() {
        terminal.print_line("No conversations found.")?;
        return Ok(PromptOutcome {
            listed: 0,
            deleted: Vec::new(),
        });
    }

    for (number, conversation) in conversations.iter().enumerate() {
        terminal.print_line(&format!("{} {}", number + 1, conversation.display_name))?;
    }

    terminal.print_line("Enter numbers of conversations you want to delete:")?;
    terminal.print_line("\"ALL\" for all conversations")?;
    terminal.print_line("Blank to skip")?;

    let answer = terminal.prompt_line(">>> ")?.unwrap_or_default();
    let positions = parse_selection(&answer, conversations.len())?;

    if positions.is_empty() {
        tracing::info!("nothing selected for deletion");
        return Ok(PromptOutcome {
            listed: conversations.len(),
            deleted: Vec::new(),
        });
    }

    let chosen: Vec<_> = positions
        .iter()
        .map(|position| conversations[*position].clone())
        .collect();
    let report = delete_conversations(api, &chosen)?;

    terminal.print_line(&format!("Deleted {} conversation(s).", report.deleted.len()))?;

    Ok(PromptOutcome {
        listed: conversations.len(),
        deleted: report.deleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_support::{FakeMessagesApi, FakeTerminal},
        usecases::contracts::RemoteError,
    };

    #[test]
    fn all_token_selects_every_position() {
        assert_eq!(parse_selection("ALL", 5), Ok(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn blank_selects_nothing() {
        assert_eq!(parse_selection("", 5), Ok(vec![]));
        assert_eq!(parse_selection("   \n", 5), Ok(vec![]));
    }

    #[test]
    fn numbers_are_converted_to_zero_based_positions() {
        assert_eq!(parse_selection("1 3", 5), Ok(vec![0, 2]));
        assert_eq!(parse_selection("3  1\n", 5), Ok(vec![2, 0]));
    }

    #[test]
    fn repeated_numbers_count_once() {
        assert_eq!(parse_selection("2 2 4", 5), Ok(vec![1, 3]));
    }

    #[test]
    fn lowercase_all_is_not_the_keyword() {
        assert_eq!(
            parse_selection("all", 5),
            Err(SelectionError::InvalidToken {
                token: "all".to_owned()
            })
        );
    }

    #[test]
    fn rejects_zero_and_out_of_range_numbers() {
        assert_eq!(
            parse_selection("0", 3),
            Err(SelectionError::OutOfRange {
                number: 0,
                total: 3
            })
        );
        assert_eq!(
            parse_selection("1 4", 3),
            Err(SelectionError::OutOfRange {
                number: 4,
                total: 3
            })
        );
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(matches!(
            parse_selection("1 x", 3),
            Err(SelectionError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_selection("-1", 3),
            Err(SelectionError::InvalidToken { .. })
        ));
    }

    #[test]
    fn lists_with_one_based_numbers_and_deletes_selection() {
        let api = FakeMessagesApi::default().with_direct_peers(&[11, 22, 33]);
        let mut terminal = FakeTerminal::new(vec![Some("1 3")]);

        let outcome = run_prompt_flow(&mut terminal, &api, &ListConversationsQuery::default())
            .expect("flow should succeed");

        assert_eq!(outcome.listed, 3);
        assert_eq!(outcome.deleted, vec![11, 33]);
        assert_eq!(terminal.output[0], "1 User11 Test");
        assert_eq!(terminal.output[2], "3 User33 Test");
        assert!(terminal
            .output
            .iter()
            .any(|line| line == "Deleted 2 conversation(s)."));
    }

    #[test]
    fn blank_answer_deletes_nothing() {
        let api = FakeMessagesApi::default().with_direct_peers(&[1, 2]);
        let mut terminal = FakeTerminal::new(vec![Some("")]);

        let outcome = run_prompt_flow(&mut terminal, &api, &ListConversationsQuery::default())
            .expect("flow should succeed");

        assert!(outcome.deleted.is_empty());
        assert!(api.deleted().is_empty());
    }

    #[test]
    fn closed_input_is_treated_as_blank() {
        let api = FakeMessagesApi::default().with_direct_peers(&[1]);
        let mut terminal = FakeTerminal::new(vec![None]);

        let outcome = run_prompt_flow(&mut terminal, &api, &ListConversationsQuery::default())
            .expect("flow should succeed");

        assert!(outcome.deleted.is_empty());
    }

    #[test]
    fn malformed_answer_aborts_before_any_deletion() {
        let api = FakeMessagesApi::default().with_direct_peers(&[1, 2]);
        let mut terminal = FakeTerminal::new(vec![Some("1 9")]);

        let err = run_prompt_flow(&mut terminal, &api, &ListConversationsQuery::default())
            .expect_err("must fail");

        assert!(matches!(err, PromptFlowError::Selection(_)));
        assert!(api.deleted().is_empty());
    }

    #[test]
    fn remote_delete_failure_propagates() {
        let api = FakeMessagesApi::default()
            .with_direct_peers(&[1, 2])
            .failing_delete(
                1,
                RemoteError::Unavailable {
                    message: "connection reset".to_owned(),
                },
            );
        let mut terminal = FakeTerminal::new(vec![Some("ALL")]);

        let err = run_prompt_flow(&mut terminal, &api, &ListConversationsQuery::default())
            .expect_err("must fail");

        assert!(matches!(err, PromptFlowError::Delete(_)));
        assert!(api.deleted().is_empty());
    }

    #[test]
    fn empty_listing_does_not_prompt() {
        let api = FakeMessagesApi::default();
        let mut terminal = FakeTerminal::new(vec![]);

        let outcome = run_prompt_flow(&mut terminal, &api, &ListConversationsQuery::default())
            .expect("flow should succeed");

        assert_eq!(outcome.listed, 0);
        assert_eq!(terminal.output, vec!["No conversations found."]);
    }
}
