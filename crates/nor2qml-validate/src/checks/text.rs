//! Free-text headers: comments (type 3) and waveform references (type 6).

use nor2qml_model::{CommentHeader, Issue, WaveformHeader};

use crate::util::check_text;

pub fn check_comment(header: &CommentHeader) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_text(&mut issues, "h_comment", header.h_comment.as_deref());
    issues
}

pub fn check_waveform(header: &WaveformHeader) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_text(&mut issues, "waveform_info", header.waveform_info.as_deref());
    issues
}
