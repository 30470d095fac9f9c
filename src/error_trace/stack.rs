use std::backtrace::Backtrace;

/// Frames kept in an error-trace diagnostic.
pub const STACK_DEPTH: usize = 10;

/// Renders the innermost `depth` frames of the current stack, newline-led,
/// without the frames of the capture itself.
pub fn capture_stack(depth: usize) -> String {
    let rendered = Backtrace::force_capture().to_string();
    let frames = split_frames(&rendered);
    let skip = frames.iter().take_while(|f| is_capture_frame(f)).count();

    let kept: Vec<&str> = frames
        .iter()
        .skip(skip)
        .take(depth)
        .map(String::as_str)
        .collect();
    format!("\n{}", kept.join("\n"))
}

fn split_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines() {
        if is_frame_header(line) || frames.is_empty() {
            frames.push(line.to_string());
        } else if let Some(frame) = frames.last_mut() {
            frame.push('\n');
            frame.push_str(line);
        }
    }
    frames
}

// "  12: symbol::path"
fn is_frame_header(line: &str) -> bool {
    match line.trim_start().split_once(':') {
        Some((index, _)) => !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

fn is_capture_frame(frame: &str) -> bool {
    let header = frame.lines().next().unwrap_or_default();
    header.contains("backtrace") || header.contains("capture_stack")
}
