//! Detecting and fixing universally disliked colors.
//!
//! Dark yellow-greens, i.e., the colors of bile, mucus, and mud, are
//! consistently disliked across cultures. A color is disliked if its hue
//! falls into `89.5..=111.5`, its chroma exceeds 16.5, and its tone is below
//! 64.5.

use crate::{Float, Hct};

/// Determine whether the color is disliked.
pub fn is_disliked(hct: &Hct) -> bool {
    is_disliked_hct(hct.hue(), hct.chroma(), hct.tone())
}

fn is_disliked_hct(hue: Float, chroma: Float, tone: Float) -> bool {
    let hue_passes = (89.5..=111.5).contains(&hue);
    let chroma_passes = chroma > 16.5;
    let tone_passes = tone < 64.5;

    hue_passes && chroma_passes && tone_passes
}

/// Lighten a disliked color to tone 70. Other colors are returned unchanged.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::new(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

#[cfg(test)]
mod test {
    use super::{fix_if_disliked, is_disliked, is_disliked_hct};
    use crate::Hct;

    #[test]
    fn test_monk_skin_tones() {
        // Skin tones are liked.
        for argb in [
            0xfff6_ede4_u32, 0xfff3_e7db, 0xfff7_ead0, 0xffea_daba, 0xffd7_bd96, 0xffa0_7e56,
            0xff82_5c43, 0xff60_4134, 0xff3a_312a, 0xff29_2420,
        ] {
            assert!(!is_disliked(&Hct::from_argb(argb)), "{:08x} is liked", argb);
        }
    }

    #[test]
    fn test_thresholds() {
        assert!(is_disliked_hct(89.5, 20.0, 50.0));
        assert!(!is_disliked_hct(89.4, 20.0, 50.0));
        assert!(is_disliked_hct(111.5, 20.0, 50.0));
        assert!(!is_disliked_hct(111.6, 20.0, 50.0));

        assert!(!is_disliked_hct(100.0, 16.5, 50.0));
        assert!(is_disliked_hct(100.0, 16.6, 50.0));

        assert!(is_disliked_hct(100.0, 20.0, 64.4));
        assert!(!is_disliked_hct(100.0, 20.0, 64.5));
    }

    #[test]
    fn test_bile_colors() {
        for argb in [0xff95_884b_u32, 0xff71_6b40, 0xffb0_8e00, 0xff4c_4308, 0xff46_4521] {
            assert!(is_disliked(&Hct::from_argb(argb)), "{:08x} is disliked", argb);
        }
    }

    #[test]
    fn test_fix() {
        let bile = Hct::from_argb(0xff95_884b);
        let fixed = fix_if_disliked(bile);
        assert!(!is_disliked(&fixed));
        assert!((fixed.tone() - 70.0).abs() < 0.5, "tone {} is not 70", fixed.tone());

        // Already lightened colors stay put.
        let light = Hct::new(100.0, 50.0, 70.0);
        assert!(!is_disliked(&light));
        assert_eq!(fix_if_disliked(light), light);
    }
}
