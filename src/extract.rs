//! Pulls the usable region out of a model reply.
//!
//! Replies usually wrap the payload in a markdown fence (```lang ... ```),
//! sometimes with prose around it, sometimes with no fence at all. The
//! scanner works line by line: the first fence line opens the block, the
//! next one closes it, and everything between is returned byte-for-byte.
//! Indentation inside the block is part of the payload and never touched.

/// What we found in the reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeBlock {
  /// Body of the first fenced block, fences and any surrounding prose dropped.
  Fenced(String),
  /// No fence anywhere; the whole reply, untouched.
  Unfenced(String),
  /// Reply was empty/whitespace, or the fenced block was.
  NotFound,
}

impl CodeBlock {
  pub fn into_text(self) -> Option<String> {
    match self {
      CodeBlock::Fenced(s) | CodeBlock::Unfenced(s) => Some(s),
      CodeBlock::NotFound => None,
    }
  }
}

/// A fence line is any line whose first non-blank characters are "```".
/// The opening fence may carry a language tag; we never look at it.
fn is_fence(line: &str) -> bool {
  line.trim_start().starts_with("```")
}

pub fn extract_code_block(raw: &str) -> CodeBlock {
  let mut inside = false;
  let mut opened = false;
  let mut body = String::new();

  for line in raw.split_inclusive('\n') {
    if is_fence(line) {
      if inside {
        break; // closing fence; anything after is prose
      }
      inside = true;
      opened = true;
      continue;
    }
    if inside {
      body.push_str(line);
    }
  }

  if !opened {
    if raw.trim().is_empty() {
      return CodeBlock::NotFound;
    }
    return CodeBlock::Unfenced(raw.to_string());
  }
  if body.trim().is_empty() {
    CodeBlock::NotFound
  } else {
    CodeBlock::Fenced(body)
  }
}
