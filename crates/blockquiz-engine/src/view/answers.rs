//! Answer-list edits made in an MCQ block's edit form.
//!
//! Each function returns the complete new list, which the caller pushes
//! back as the block's `answers` attribute. An index past the end leaves
//! the list as it was.

use crate::models::Answer;

pub fn add_answer(answers: &[Answer]) -> Vec<Answer> {
    let mut next = answers.to_vec();
    next.push(Answer::blank());
    next
}

pub fn remove_answer(answers: &[Answer], index: usize) -> Vec<Answer> {
    answers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, answer)| answer.clone())
        .collect()
}

pub fn set_answer_text(answers: &[Answer], index: usize, text: &str) -> Vec<Answer> {
    edit_at(answers, index, |answer| answer.text = text.to_string())
}

pub fn set_answer_correct(answers: &[Answer], index: usize, correct: bool) -> Vec<Answer> {
    edit_at(answers, index, |answer| answer.correct = correct)
}

fn edit_at(answers: &[Answer], index: usize, edit: impl FnOnce(&mut Answer)) -> Vec<Answer> {
    let mut next = answers.to_vec();
    if let Some(answer) = next.get_mut(index) {
        edit(answer);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample() -> Vec<Answer> {
        vec![
            Answer::new("a", false),
            Answer::new("b", true),
            Answer::new("c", false),
            Answer::new("d", false),
        ]
    }

    fn texts(answers: &[Answer]) -> Vec<&str> {
        answers.iter().map(|a| a.text.as_str()).collect()
    }

    #[rstest]
    #[case(0, vec!["b", "c", "d"])]
    #[case(1, vec!["a", "c", "d"])]
    #[case(3, vec!["a", "b", "c"])]
    fn test_remove_keeps_relative_order(#[case] index: usize, #[case] expected: Vec<&str>) {
        let answers = sample();
        let next = remove_answer(&answers, index);
        assert_eq!(next.len(), answers.len() - 1);
        assert_eq!(texts(&next), expected);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        assert_eq!(remove_answer(&sample(), 9), sample());
    }

    #[test]
    fn test_add_appends_blank() {
        let next = add_answer(&sample());
        assert_eq!(next.len(), 5);
        assert_eq!(next[4], Answer::blank());
        assert_eq!(add_answer(&[]), vec![Answer::blank()]);
    }

    #[test]
    fn test_edit_text_and_flag_by_index() {
        let next = set_answer_text(&sample(), 2, "see");
        assert_eq!(texts(&next), vec!["a", "b", "see", "d"]);

        let next = set_answer_correct(&next, 0, true);
        let flags: Vec<bool> = next.iter().map(|a| a.correct).collect();
        assert_eq!(flags, vec![true, true, false, false]);

        assert_eq!(set_answer_correct(&sample(), 4, true), sample());
    }
}
