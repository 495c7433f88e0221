//! Board rendering.

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Ui, Vec2, pos2, vec2};
use queensight_core::{Board, CellState, Position};

bitflags::bitflags! {
    /// Per-cell visual emphasis layered over the checker pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellVisual: u8 {
        const TRYING = 0b0000_0001;
        const ATTACKED = 0b0000_0010;
    }
}

const LIGHT_SQUARE: Color32 = Color32::from_rgb(0xf1, 0xf5, 0xf9);
const DARK_SQUARE: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b);
const TRYING_TINT: Color32 = Color32::from_rgba_premultiplied(0xb4, 0x8a, 0x10, 0x90);
const ATTACKED_TINT: Color32 = Color32::from_rgba_premultiplied(0x80, 0x10, 0x10, 0x30);
const QUEEN_COLOR: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);

/// What the grid needs to paint one frame.
#[derive(Debug)]
pub(crate) struct GridViewModel<'a> {
    board: &'a Board,
    enabled: CellVisual,
}

impl<'a> GridViewModel<'a> {
    #[must_use]
    pub(crate) fn new(board: &'a Board, show_attacks: bool) -> Self {
        let mut enabled = CellVisual::TRYING;
        if show_attacks {
            enabled |= CellVisual::ATTACKED;
        }
        Self { board, enabled }
    }

    fn cell_visual(&self, pos: Position) -> CellVisual {
        let mut visual = CellVisual::empty();
        if self.board.cell(pos).is_trying() {
            visual |= CellVisual::TRYING;
        }
        if self.board.is_attacked(pos) {
            visual |= CellVisual::ATTACKED;
        }
        visual & self.enabled
    }
}

/// Paints the board as a centered square filling the available space.
pub(crate) fn show(ui: &mut Ui, vm: &GridViewModel<'_>) {
    let n = vm.board.size();
    let available = ui.available_size();
    let side = available.min_elem().max(0.0);
    let (response, painter) = ui.allocate_painter(available, Sense::hover());

    let board_rect = Rect::from_center_size(response.rect.center(), Vec2::splat(side));
    #[expect(clippy::cast_precision_loss)]
    let cell_size = side / n as f32;

    for row in 0..n {
        for col in 0..n {
            let pos = Position::new(row, col);
            #[expect(clippy::cast_precision_loss)]
            let cell_rect = Rect::from_min_size(
                pos2(
                    board_rect.min.x + col as f32 * cell_size,
                    board_rect.min.y + row as f32 * cell_size,
                ),
                vec2(cell_size, cell_size),
            );

            let fill = if (row + col) % 2 == 0 {
                LIGHT_SQUARE
            } else {
                DARK_SQUARE
            };
            painter.rect_filled(cell_rect, 0.0, fill);

            let visual = vm.cell_visual(pos);
            if visual.contains(CellVisual::TRYING) {
                painter.rect_filled(cell_rect, 0.0, TRYING_TINT);
            }
            if visual.contains(CellVisual::ATTACKED) {
                painter.rect_filled(cell_rect.shrink(cell_size * 0.06), 2.0, ATTACKED_TINT);
            }

            if vm.board.cell(pos) == CellState::Queen {
                painter.text(
                    cell_rect.center(),
                    Align2::CENTER_CENTER,
                    "♛",
                    FontId::proportional(cell_size * 0.7),
                    QUEEN_COLOR,
                );
            }
        }
    }
}
