//! Image rendering of a filled grid.
//!
//! Every cell is a white square on a black background; blocked cells stay
//! black. Letters are drawn with a built-in 5x7 bitmap font scaled to the
//! cell size, so no font file is needed at run time.

use crossfill_core::LetterGrid;
use image::{Rgba, RgbaImage};

const CELL_SIZE: u32 = 100;
const CELL_BORDER: u32 = 2;
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 10;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws the grid as an image of `CELL_SIZE` pixels per cell.
pub(crate) fn render(grid: &LetterGrid) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(
        pixels(grid.width()) * CELL_SIZE,
        pixels(grid.height()) * CELL_SIZE,
        BLACK,
    );
    let interior = CELL_SIZE - 2 * CELL_BORDER;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if !grid.is_open(row, col) {
                continue;
            }
            let x = pixels(col) * CELL_SIZE + CELL_BORDER;
            let y = pixels(row) * CELL_SIZE + CELL_BORDER;
            fill_rect(&mut image, x, y, interior, interior, WHITE);
            if let Some(letter) = grid.get(row, col) {
                let (width, height) = (GLYPH_WIDTH * GLYPH_SCALE, GLYPH_HEIGHT * GLYPH_SCALE);
                let x = x + (interior - width) / 2;
                let y = y + (interior - height) / 2;
                draw_glyph(&mut image, x, y, letter);
            }
        }
    }
    image
}

#[expect(clippy::cast_possible_truncation)]
fn pixels(n: usize) -> u32 {
    n as u32
}

fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    for py in y..y + height {
        for px in x..x + width {
            image.put_pixel(px, py, color);
        }
    }
}

fn draw_glyph(image: &mut RgbaImage, x: u32, y: u32, letter: char) {
    for (row, bits) in (0..).zip(glyph(letter)) {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                fill_rect(
                    image,
                    x + col * GLYPH_SCALE,
                    y + row * GLYPH_SCALE,
                    GLYPH_SCALE,
                    GLYPH_SCALE,
                    BLACK,
                );
            }
        }
    }
}

/// Returns the rows of a glyph, most significant of the low five bits
/// leftmost. Characters without a glyph are drawn as `?`.
fn glyph(letter: char) -> [u8; 7] {
    match letter.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
    }
}

#[cfg(test)]
mod tests {
    use crossfill_core::{Assignment, Crossword};

    use super::*;

    fn center(row: u32, col: u32) -> (u32, u32) {
        (col * CELL_SIZE + CELL_SIZE / 2, row * CELL_SIZE + CELL_SIZE / 2)
    }

    #[test]
    fn test_render_cells() {
        let crossword = Crossword::parse("__\n_#", "AB\nAC").unwrap();
        let mut assignment = Assignment::for_crossword(&crossword);
        let across = crossword.variable_ids().next().unwrap();
        assignment.assign(across, crossword.words().find("AB").unwrap());
        let image = render(&crossword.letter_grid(&assignment));

        assert_eq!(image.dimensions(), (2 * CELL_SIZE, 2 * CELL_SIZE));
        // Cell borders and blocked cells are black.
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        let (x, y) = center(1, 1);
        assert_eq!(*image.get_pixel(x, y), BLACK);
        // An open cell without a letter is white throughout.
        let (x, y) = center(1, 0);
        assert_eq!(*image.get_pixel(x, y), WHITE);
        // The letter cells carry ink.
        for col in 0..2 {
            let x0 = col * CELL_SIZE + CELL_BORDER;
            let inked = (x0..x0 + CELL_SIZE - 2 * CELL_BORDER)
                .flat_map(|x| (CELL_BORDER..CELL_SIZE - CELL_BORDER).map(move |y| (x, y)))
                .any(|(x, y)| *image.get_pixel(x, y) == BLACK);
            assert!(inked, "cell (0, {col}) has no letter");
        }
    }

    #[test]
    fn test_glyph_fallback() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('é'), glyph('?'));
        assert_ne!(glyph('O'), glyph('0'));
    }
}
