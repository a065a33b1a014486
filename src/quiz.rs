use crate::data::ReferenceData;
use crate::error::{CoverScoutError, Result};
use crate::session::SessionState;
use crate::types::answer::AnswerValue;
use crate::types::assessment::AssessmentResult;
use crate::types::question::{AnswerKind, Question};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    Completed(AssessmentResult),
    Aborted,
}

enum Command {
    Back,
    Restart,
    Quit,
    Continue,
    Answer(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "back" | "b" => Command::Back,
        "restart" | "r" => Command::Restart,
        "quit" | "q" => Command::Quit,
        "" => Command::Continue,
        other => Command::Answer(other.to_string()),
    }
}

/// Reads one answer for `question` from user text. Choices may be given by
/// their exact label or their 1-based number; a label wins when both match.
pub fn parse_answer(question: &Question, input: &str) -> std::result::Result<AnswerValue, String> {
    let pick = |token: &str| -> std::result::Result<String, String> {
        let token = token.trim();
        if question.has_option(token) {
            return Ok(token.to_string());
        }
        match token.parse::<usize>() {
            Ok(number) => question
                .options
                .get(number.wrapping_sub(1))
                .cloned()
                .ok_or_else(|| format!("choose a number between 1 and {}", question.options.len())),
            Err(_) => Err(format!("'{token}' is not one of the options")),
        }
    };

    match question.answer_kind {
        AnswerKind::Boolean => match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" => Ok(AnswerValue::Boolean(true)),
            "n" | "no" | "false" => Ok(AnswerValue::Boolean(false)),
            _ => Err("answer y or n".to_string()),
        },
        AnswerKind::SingleChoice | AnswerKind::Scale => pick(input).map(AnswerValue::Choice),
        AnswerKind::MultiChoice => input
            .split(',')
            .filter(|token| !token.trim().is_empty())
            .map(pick)
            .collect::<std::result::Result<_, _>>()
            .map(AnswerValue::Selection),
    }
}

fn print_question<W: Write>(
    out: &mut W,
    question: &Question,
    index: usize,
    total: usize,
    current: Option<&AnswerValue>,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {} of {}: {}", index + 1, total, question.prompt)?;
    if let Some(help) = &question.help_text {
        writeln!(out, "  {help}")?;
    }
    match question.answer_kind {
        AnswerKind::Boolean => writeln!(out, "  [y/n]")?,
        AnswerKind::MultiChoice => {
            for (number, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}) {}", number + 1, option)?;
            }
            writeln!(out, "  (comma-separated numbers)")?;
        }
        AnswerKind::SingleChoice | AnswerKind::Scale => {
            for (number, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}) {}", number + 1, option)?;
            }
        }
    }
    if let Some(answer) = current {
        writeln!(out, "  current answer: {answer} (press enter to keep)")?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Walks a session over line-oriented input until it completes or the
/// input ends.
pub fn run<R: BufRead, W: Write>(
    data: &ReferenceData,
    mut input: R,
    out: &mut W,
) -> Result<QuizOutcome> {
    let total = data.questions.len();
    let mut state = SessionState::new();
    let mut line = String::new();

    loop {
        if let Some(result) = state.result() {
            return Ok(QuizOutcome::Completed(result.clone()));
        }
        let (Some(index), Some(question)) = (state.question_index(), state.current_question(data))
        else {
            state = state.advance(data);
            continue;
        };

        print_question(out, question, index, total, state.current_answer(data))?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(QuizOutcome::Aborted);
        }

        state = match parse_command(&line) {
            Command::Quit => return Ok(QuizOutcome::Aborted),
            Command::Back => {
                if index == 0 {
                    writeln!(out, "already at the first question")?;
                }
                state.retreat()
            }
            Command::Restart => {
                writeln!(out, "restarting assessment")?;
                state.restart()
            }
            Command::Continue => {
                if let Err(CoverScoutError::UnansweredQuestion(_)) = state.ensure_answered(data) {
                    writeln!(
                        out,
                        "please answer the question: we need your response to provide accurate recommendations"
                    )?;
                    continue;
                }
                state.advance(data)
            }
            Command::Answer(text) => match parse_answer(question, &text) {
                Ok(value) => state.answer_current(data, value)?.advance(data),
                Err(hint) => {
                    writeln!(out, "{hint}")?;
                    continue;
                }
            },
        };
    }
}
