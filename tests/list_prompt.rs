//! End-to-end selection prompt flows over scripted event streams.

mod support;

use promptline::choice::RawChoice;
use promptline::events::{InputSource, Key, KeyPress};
use promptline::prompt::PromptConfig;
use promptline::select::SelectPrompt;
use support::{Frame, RecordingRender};

fn basic_prompt() -> SelectPrompt {
    SelectPrompt::new(PromptConfig::new("Pick one").choices(["foo", "bar", "bum"])).unwrap()
}

#[tokio::test]
async fn line_event_resolves_with_the_first_choice_by_default() {
    let (handle, mut source) = InputSource::channel();
    let mut render = RecordingRender::new();
    let mut prompt = basic_prompt();

    handle.line("");
    let answer = prompt.run(&mut source, &mut render).await.unwrap();

    assert_eq!(answer, "foo");
    assert_eq!(
        render.last(),
        &Frame::Submitted {
            message: "Pick one".into(),
            answer: "foo".into(),
        }
    );
}

#[tokio::test]
async fn arrow_movement_changes_the_resolved_value() {
    let (handle, mut source) = InputSource::channel();
    let mut render = RecordingRender::new();
    let mut prompt = basic_prompt();

    handle.key(KeyPress::plain(Key::Down));
    handle.key(KeyPress::plain(Key::Down));
    handle.key(KeyPress::plain(Key::Up));
    handle.line("");

    let answer = prompt.run(&mut source, &mut render).await.unwrap();
    assert_eq!(answer, "bar");
}

#[tokio::test]
async fn movement_wraps_at_both_ends() {
    let (handle, mut source) = InputSource::channel();
    let mut prompt = basic_prompt();
    handle.key(KeyPress::plain(Key::Up));
    handle.line("");
    let answer = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(answer, "bum");

    let (handle, mut source) = InputSource::channel();
    let mut prompt = basic_prompt();
    for _ in 0..3 {
        handle.key(KeyPress::plain(Key::Down));
    }
    handle.line("");
    let answer = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(answer, "foo");
}

#[tokio::test]
async fn vi_and_emacs_chords_drive_the_same_run() {
    let (handle, mut source) = InputSource::channel();
    let mut prompt = basic_prompt();

    handle.key(KeyPress::ch('j'));
    handle.key(KeyPress::ctrl('n'));
    handle.key(KeyPress::ctrl('p'));
    handle.key(KeyPress::ch('k'));
    handle.line("");

    let answer = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(answer, "foo");
}

#[tokio::test]
async fn shortcut_digit_jumps_then_line_submits() {
    let (handle, mut source) = InputSource::channel();
    let mut prompt = basic_prompt();

    handle.key(KeyPress::ch('2'));
    handle.line("");

    let answer = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(answer, "bar");
}

#[tokio::test]
async fn unmapped_keys_do_not_repaint_or_move() {
    let (handle, mut source) = InputSource::channel();
    let mut render = RecordingRender::new();
    let mut prompt = basic_prompt();

    handle.key(KeyPress::ch('x'));
    handle.key(KeyPress::ch('n'));
    handle.line("");

    let answer = prompt.run(&mut source, &mut render).await.unwrap();
    assert_eq!(answer, "foo");
    // One initial select frame plus the submitted frame, nothing in between.
    assert_eq!(render.frames.len(), 2);
}

#[tokio::test]
async fn string_default_preselects_the_matching_value() {
    let (handle, mut source) = InputSource::channel();
    let mut prompt = SelectPrompt::new(
        PromptConfig::new("Pick one")
            .choices(["foo", "bar", "bum"])
            .default_value("bar"),
    )
    .unwrap();

    handle.line("");
    let answer = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(answer, "bar");
}

#[tokio::test]
async fn invalid_defaults_fall_back_to_the_first_choice() {
    for config in [
        PromptConfig::new("Pick one")
            .choices(["foo", "bar", "bum"])
            .default_value("babar"),
        PromptConfig::new("Pick one")
            .choices(["foo", "bar", "bum"])
            .default_index(4),
    ] {
        let (handle, mut source) = InputSource::channel();
        let mut prompt = SelectPrompt::new(config).unwrap();
        handle.line("");
        let answer = prompt
            .run(&mut source, &mut RecordingRender::new())
            .await
            .unwrap();
        assert_eq!(answer, "foo");
    }
}

#[tokio::test]
async fn cursor_is_retained_across_runs_until_reset() {
    let mut prompt = basic_prompt();

    let (handle, mut source) = InputSource::channel();
    handle.key(KeyPress::plain(Key::Down));
    handle.line("");
    let first = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(first, "bar");

    // A fresh run with no movement resolves from where the last one ended.
    let (handle, mut source) = InputSource::channel();
    handle.line("");
    let second = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(second, "bar");

    prompt.reset_cursor();
    let (handle, mut source) = InputSource::channel();
    handle.line("");
    let third = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(third, "foo");
}

#[tokio::test]
async fn disabled_choices_are_shown_but_skipped() {
    let (handle, mut source) = InputSource::channel();
    let mut render = RecordingRender::new();
    let mut prompt = SelectPrompt::new(PromptConfig::new("Pick one").choices([
        RawChoice::from("foo"),
        RawChoice::Record {
            name: Some("frozen".into()),
            value: None,
            disabled: true,
        },
        RawChoice::from("bar"),
    ]))
    .unwrap();

    handle.key(KeyPress::plain(Key::Down));
    handle.line("");

    let answer = prompt.run(&mut source, &mut render).await.unwrap();
    assert_eq!(answer, "bar");

    let windows = render.select_windows();
    assert!(windows[0].iter().any(|line| line.contains("(disabled)")));
}

#[tokio::test]
async fn multiline_labels_keep_the_active_choice_in_the_window() {
    let (handle, mut source) = InputSource::channel();
    let mut render = RecordingRender::new();
    let mut prompt = SelectPrompt::new(
        PromptConfig::new("Pick one")
            .choices(["a\n\n", "b\n\n"])
            .page_size(3),
    )
    .unwrap();

    handle.key(KeyPress::plain(Key::Down));
    handle.line("");
    let answer = prompt.run(&mut source, &mut render).await.unwrap();
    assert_eq!(answer, "b\n\n");

    // 6 rendered lines total; the window scrolls down when the second
    // choice becomes active.
    let windows = render.select_windows();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].len(), 3);
    let scrolls: Vec<usize> = render
        .frames
        .iter()
        .filter_map(|frame| match frame {
            Frame::Select { scroll_offset, .. } => Some(*scroll_offset),
            _ => None,
        })
        .collect();
    assert_eq!(scrolls[0], 1);
    assert_eq!(scrolls[1], 3);
}

#[tokio::test]
async fn events_buffered_before_the_run_are_consumed_in_order() {
    let (handle, mut source) = InputSource::channel();
    handle.key(KeyPress::ch('3'));
    handle.line("");
    drop(handle);

    let mut prompt = basic_prompt();
    let answer = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap();
    assert_eq!(answer, "bum");
}

#[tokio::test]
async fn closed_source_before_submission_is_an_error() {
    let (handle, mut source) = InputSource::channel();
    handle.key(KeyPress::plain(Key::Down));
    drop(handle);

    let mut prompt = basic_prompt();
    let err = prompt
        .run(&mut source, &mut RecordingRender::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}
