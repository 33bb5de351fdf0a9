//! Visual-line pagination for choice windows.
//!
//! Pagination is a pure function over rendered *lines*, not choice indices:
//! a choice whose label embeds newlines occupies several lines, and the
//! window math must not desynchronize from what the terminal actually shows.

/// Bounded window over a rendered line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Lines to paint, in order.
    pub window: Vec<String>,
    /// Index of the first window line within the full sequence.
    pub scroll_offset: usize,
}

/// Compute the visible window around the active line.
///
/// `line_offset` is the cumulative rendered-line position of the active
/// choice (label newlines included). Stateless and restartable: identical
/// inputs always produce the identical page.
///
/// When the sequence exceeds `page_size`, the active line is kept roughly
/// centered, clamped at the sequence edges, and is always inside the window.
pub fn paginate(lines: &[String], line_offset: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    if lines.len() <= page_size {
        return Page {
            window: lines.to_vec(),
            scroll_offset: 0,
        };
    }

    let active = line_offset.min(lines.len() - 1);
    let half = page_size / 2;
    let max_offset = lines.len() - page_size;
    let scroll_offset = active.saturating_sub(half).min(max_offset);

    Page {
        window: lines[scroll_offset..scroll_offset + page_size].to_vec(),
        scroll_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line-{i}")).collect()
    }

    #[test]
    fn short_sequences_pass_through_whole() {
        let all = lines(3);
        let page = paginate(&all, 1, 7);
        assert_eq!(page.window, all);
        assert_eq!(page.scroll_offset, 0);
    }

    #[test]
    fn active_line_is_always_inside_the_window() {
        let all = lines(20);
        for offset in 0..20 {
            let page = paginate(&all, offset, 7);
            assert_eq!(page.window.len(), 7);
            assert!(
                (page.scroll_offset..page.scroll_offset + 7).contains(&offset),
                "offset {offset} fell outside window starting at {}",
                page.scroll_offset
            );
        }
    }

    #[test]
    fn window_clamps_at_sequence_edges() {
        let all = lines(10);
        assert_eq!(paginate(&all, 0, 4).scroll_offset, 0);
        assert_eq!(paginate(&all, 9, 4).scroll_offset, 6);
    }

    #[test]
    fn identical_inputs_produce_identical_pages() {
        let all = lines(12);
        assert_eq!(paginate(&all, 5, 4), paginate(&all, 5, 4));
    }

    #[test]
    fn out_of_range_offset_is_clamped() {
        let all = lines(5);
        let page = paginate(&all, 99, 3);
        assert_eq!(page.scroll_offset, 2);
        assert_eq!(page.window.last().unwrap(), "line-4");
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let all = lines(4);
        let page = paginate(&all, 2, 0);
        assert_eq!(page.window, vec!["line-2".to_string()]);
    }
}
