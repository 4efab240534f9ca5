// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_quiz_markup(size: usize) -> String {
    let base = concat!(
        "<h2>Section</h2>\n",
        "<p>Paragraph with some content.</p>\n",
        r#"<div data-type="ai" data-question="Why?" data-answer="Because."></div>"#,
        "\n",
        r#"<div data-type="mcq" data-question-text="Pick one" data-answers='[{"text":"a","correct":false},{"text":"b","correct":true}]'></div>"#,
        "\n<ul><li>item</li></ul>\n",
    );
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_structured_question(answers: usize) -> String {
    let answers: Vec<String> = (0..answers)
        .map(|i| {
            if i == 0 {
                format!("answer(\"{i}\", correct = TRUE)")
            } else {
                format!("answer(\"{i}\")")
            }
        })
        .collect();
    format!("question(\"Which one?\",\n{}\n)\n", answers.join(",\n"))
}
