use colorstories::rendering::layout::{bar_top, baselines, CANVAS_SIZE, TEXT_X};
use colorstories::rendering::render_story;
use colorstories::{ColorValue, StoryRecord};
use image::Rgb;

fn happy_river() -> StoryRecord {
    StoryRecord::new("#123ABC".parse::<ColorValue>().unwrap(), "Happy", "River")
}

#[tokio::test]
async fn story_card_layout_is_pixel_exact() {
    let img = render_story(&happy_river()).await.expect("render");
    assert_eq!((img.width, img.height), (1080, 1080));
    assert_eq!(&img.png_data[0..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&img.png_data).expect("decode").to_rgb8();
    assert_eq!(decoded.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));

    let fill = Rgb([0x12, 0x3A, 0xBC]);
    let white = Rgb([255, 255, 255]);
    let black = Rgb([0, 0, 0]);

    // color field above the caption bar
    for y in 0..bar_top() {
        for x in 0..CANVAS_SIZE {
            assert_eq!(decoded.get_pixel(x, y), &fill, "pixel ({}, {})", x, y);
        }
    }

    // the bar's top row and everything left of the text margin is white
    for x in 0..CANVAS_SIZE {
        assert_eq!(decoded.get_pixel(x, bar_top()), &white);
    }
    for y in bar_top()..CANVAS_SIZE {
        for x in 0..TEXT_X as u32 {
            assert_eq!(decoded.get_pixel(x, y), &white, "pixel ({}, {})", x, y);
        }
    }

    // every caption pixel is white or black, and black only inside a text line
    let scale = 5;
    let lines: Vec<(u32, u32)> = baselines()
        .iter()
        .map(|b| ((*b - 7 * scale) as u32, (*b + scale) as u32))
        .collect();
    let mut ink_per_line = [0usize; 3];
    for y in bar_top()..CANVAS_SIZE {
        for x in 0..CANVAS_SIZE {
            let p = decoded.get_pixel(x, y);
            if *p == black {
                let line = lines
                    .iter()
                    .position(|(top, bottom)| (*top..*bottom).contains(&y))
                    .unwrap_or_else(|| panic!("ink outside text lines at ({}, {})", x, y));
                ink_per_line[line] += 1;
            } else {
                assert_eq!(p, &white, "unexpected color at ({}, {})", x, y);
            }
        }
    }
    assert!(ink_per_line.iter().all(|n| *n > 0), "{:?}", ink_per_line);

    // glyph bodies sit on the baseline: the row just above each baseline has ink,
    // the baseline row itself only carries descenders
    for b in baselines() {
        let above = (b - 1) as u32;
        assert!((0..CANVAS_SIZE).any(|x| decoded.get_pixel(x, above) == &black));
    }
}

#[tokio::test]
async fn identical_stories_render_identical_bytes() {
    let a = render_story(&happy_river()).await.unwrap();
    let b = render_story(&happy_river()).await.unwrap();
    assert_eq!(a.digest(), b.digest());

    let other = StoryRecord::new(ColorValue::new(0x123ABD), "Happy", "River");
    let c = render_story(&other).await.unwrap();
    assert_ne!(a.digest(), c.digest());
}
