use std::time::Duration;

use radrep_compose::GeneratedText;
use radrep_session::clipboard::run_paste_sequence;
use radrep_session::{Clipboard, ClipboardError, MemoryClipboard, PasteSequencer, PasteState};

fn report() -> GeneratedText {
    GeneratedText::new("Описание.", "Заключение. Норма")
}

/// A clipboard that refuses every operation.
struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display".into()))
    }

    fn text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable("no display".into()))
    }
}

#[test]
fn clones_share_one_buffer() {
    let mut a = MemoryClipboard::new();
    let mut b = a.clone();
    a.set_text("текст").unwrap();
    assert_eq!(b.text().unwrap(), "текст");
}

#[test]
fn start_puts_description_on_clipboard() {
    let mut board = MemoryClipboard::new();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());

    assert_eq!(seq.state(), PasteState::WaitingFirstPaste);
    assert_eq!(board.text().unwrap(), "Описание.");
}

#[test]
fn unchanged_clipboard_does_not_advance() {
    let mut board = MemoryClipboard::new();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());

    for _ in 0..5 {
        assert_eq!(seq.tick(&mut board), PasteState::WaitingFirstPaste);
    }
}

#[test]
fn polling_walks_through_both_pastes() {
    let mut board = MemoryClipboard::new();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());

    board.set_text("").unwrap();
    assert_eq!(seq.tick(&mut board), PasteState::WaitingSecondPaste);
    assert_eq!(board.text().unwrap(), "Заключение. Норма");

    assert_eq!(seq.tick(&mut board), PasteState::WaitingSecondPaste);

    board.set_text("что-то другое").unwrap();
    assert_eq!(seq.tick(&mut board), PasteState::Idle);
    assert_eq!(seq.tick(&mut board), PasteState::Idle);
}

#[test]
fn own_writes_are_not_mistaken_for_pastes() {
    let mut board = MemoryClipboard::new();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());

    // Change notification for our own description write.
    let state = seq.on_clipboard_changed(&mut board, "Описание.");
    assert_eq!(state, PasteState::WaitingFirstPaste);

    let state = seq.on_clipboard_changed(&mut board, "");
    assert_eq!(state, PasteState::WaitingSecondPaste);

    // Notification for the conclusion we just wrote.
    let state = seq.on_clipboard_changed(&mut board, "Заключение. Норма");
    assert_eq!(state, PasteState::WaitingSecondPaste);

    let state = seq.on_clipboard_changed(&mut board, "");
    assert_eq!(state, PasteState::Idle);
}

#[test]
fn restart_abandons_running_sequence() {
    let mut board = MemoryClipboard::new();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());
    board.set_text("").unwrap();
    seq.tick(&mut board);
    assert_eq!(seq.state(), PasteState::WaitingSecondPaste);

    seq.start(&mut board, &GeneratedText::new("Второе.", "Заключение. Второе"));
    assert_eq!(seq.state(), PasteState::WaitingFirstPaste);
    assert_eq!(board.text().unwrap(), "Второе.");
}

#[test]
fn broken_clipboard_is_ignored() {
    let mut seq = PasteSequencer::new();
    seq.start(&mut BrokenClipboard, &report());
    assert_eq!(seq.state(), PasteState::Idle);
    assert_eq!(seq.tick(&mut BrokenClipboard), PasteState::Idle);
}

#[tokio::test]
async fn driver_completes_after_two_pastes() {
    let mut board = MemoryClipboard::new();
    let mut user = board.clone();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());

    let driver = run_paste_sequence(
        &mut seq,
        &mut board,
        Duration::from_millis(10),
        Duration::from_secs(5),
    );
    let pastes = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        user.set_text("").unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = user.text().unwrap();
        user.set_text("").unwrap();
        second
    };

    let (state, second) = tokio::join!(driver, pastes);
    assert_eq!(state, PasteState::Idle);
    assert_eq!(second, "Заключение. Норма");
}

#[tokio::test]
async fn driver_gives_up_after_timeout() {
    let mut board = MemoryClipboard::new();
    let mut seq = PasteSequencer::new();
    seq.start(&mut board, &report());

    let state = run_paste_sequence(
        &mut seq,
        &mut board,
        Duration::from_millis(10),
        Duration::from_millis(60),
    )
    .await;
    assert_eq!(state, PasteState::Idle);
    assert_eq!(board.text().unwrap(), "Описание.");
}
