// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Color adjustments and color-space conversions over [`Vector`].
//!
//! Colors are `(r, g, b, a)` with components nominally in `[0, 1]`. Every function
//! converts the first three lanes and passes alpha through untouched, except
//! [`modulate`] which multiplies alpha as well.
//!
//! Hue-based spaces store `(h, s, l, a)` or `(h, s, v, a)` with the hue as a
//! fraction of a full turn in `[0, 1)`.

use crate::scalar;
use crate::vector::Vector;

/// Luminance weights used by [`adjust_saturation`].
const LUMINANCE: [f32; 3] = [0.2125, 0.7154, 0.0721];

const RGB_TO_YUV: [[f32; 3]; 3] = [
    [0.299, -0.147, 0.615],
    [0.587, -0.289, -0.515],
    [0.114, 0.436, -0.100],
];

const YUV_TO_RGB: [[f32; 3]; 3] = [
    [1.0, 1.0, 1.0],
    [0.0, -0.395, 2.032],
    [1.140, -0.581, 0.0],
];

const RGB_TO_YUV_HD: [[f32; 3]; 3] = [
    [0.2126, -0.0997, 0.6150],
    [0.7152, -0.3354, -0.5586],
    [0.0722, 0.4351, -0.0564],
];

const YUV_HD_TO_RGB: [[f32; 3]; 3] = [
    [1.0, 1.0, 1.0],
    [0.0, -0.2153, 2.1324],
    [1.2803, -0.3806, 0.0],
];

/// CIE RGB to XYZ, before normalization by [`XYZ_SCALE`].
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.488_718, 0.176_204_4, 0.0],
    [0.310_680_3, 0.812_984_7, 0.010_204_8],
    [0.200_601_7, 0.010_810_9, 0.989_795_2],
];

const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [2.370_674_3, -0.513_885, 0.005_298_2],
    [-0.900_040_5, 1.425_303_6, -0.014_694_9],
    [-0.470_633_8, 0.088_581_4, 1.009_396_8],
];

const XYZ_SCALE: f32 = 0.17697;

const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.2126, 0.0193],
    [0.3576, 0.7152, 0.1192],
    [0.1805, 0.0722, 0.9505],
];

const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2406, -0.9689, 0.0557],
    [-1.5372, 1.8758, -0.2040],
    [-0.4986, 0.0415, 1.0570],
];

// IEC 61966-2-1 transfer function.
const SRGB_LINEAR_CUTOFF: f32 = 0.003_130_8;
const SRGB_ENCODED_CUTOFF: f32 = 0.040_45;
const SRGB_LINEAR_SCALE: f32 = 12.92;
const SRGB_SCALE: f32 = 1.055;
const SRGB_BIAS: f32 = 0.055;
const SRGB_GAMMA: f32 = 2.4;

/// `rgb` as a row vector times a 3x3 matrix. Alpha is carried over.
#[inline]
fn transform_rgb(c: Vector, m: &[[f32; 3]; 3]) -> Vector {
    let lane = |i: usize| c.x * m[0][i] + c.y * m[1][i] + c.z * m[2][i];
    Vector::new(lane(0), lane(1), lane(2), c.w)
}

/// Applies `f` to the color lanes only.
#[inline]
fn map_rgb(c: Vector, f: impl Fn(f32) -> f32) -> Vector {
    Vector::new(f(c.x), f(c.y), f(c.z), c.w)
}

#[inline]
fn linear_to_srgb(v: f32) -> f32 {
    if v <= SRGB_LINEAR_CUTOFF {
        v * SRGB_LINEAR_SCALE
    } else {
        SRGB_SCALE * v.powf(1.0 / SRGB_GAMMA) - SRGB_BIAS
    }
}

#[inline]
fn srgb_to_linear(v: f32) -> f32 {
    if v <= SRGB_ENCODED_CUTOFF {
        v / SRGB_LINEAR_SCALE
    } else {
        ((v + SRGB_BIAS) / SRGB_SCALE).powf(SRGB_GAMMA)
    }
}

/// `(1 - r, 1 - g, 1 - b, a)`.
#[inline]
pub fn negative(c: Vector) -> Vector {
    map_rgb(c, |v| 1.0 - v)
}

/// Component-wise product of two colors, alpha included.
#[inline]
pub fn modulate(c1: Vector, c2: Vector) -> Vector {
    c1 * c2
}

/// Blends each channel between the luminance gray (`saturation = 0`) and the
/// original color (`saturation = 1`). Values above 1 oversaturate.
pub fn adjust_saturation(c: Vector, saturation: f32) -> Vector {
    let luminance = c.x * LUMINANCE[0] + c.y * LUMINANCE[1] + c.z * LUMINANCE[2];
    map_rgb(c, |v| (v - luminance) * saturation + luminance)
}

/// Blends each channel between 50% gray (`contrast = 0`) and the original color.
pub fn adjust_contrast(c: Vector, contrast: f32) -> Vector {
    map_rgb(c, |v| (v - 0.5) * contrast + 0.5)
}

/// Hue of a chromatic color as a fraction of a turn, before wrap-around.
#[inline]
fn hue_sixths(c: Vector, max: f32, delta: f32) -> f32 {
    if c.x == max {
        (c.y - c.z) / delta
    } else if c.y == max {
        (c.z - c.x) / delta + 2.0
    } else {
        (c.x - c.y) / delta + 4.0
    }
}

/// RGB to `(hue, saturation, lightness, a)`.
///
/// Achromatic colors (`max - min < EPSILON`) get hue and saturation 0.
pub fn rgb_to_hsl(c: Vector) -> Vector {
    let min = c.x.min(c.y).min(c.z);
    let max = c.x.max(c.y).max(c.z);
    let l = (min + max) * 0.5;
    let d = max - min;
    if d < scalar::EPSILON {
        return Vector::new(0.0, 0.0, l, c.w);
    }

    let sum = min + max;
    let s = if l > 0.5 { d / (2.0 - sum) } else { d / sum };
    let mut h = hue_sixths(c, max, d) / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    Vector::new(h, s, l, c.w)
}

fn hue_to_channel(p: f32, q: f32, mut h: f32) -> f32 {
    const ONE_SIXTH: f32 = 1.0 / 6.0;
    const TWO_THIRDS: f32 = 2.0 / 3.0;
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    if h < ONE_SIXTH {
        (q - p) * 6.0 * h + p
    } else if h < 0.5 {
        q
    } else if h < TWO_THIRDS {
        (q - p) * 6.0 * (TWO_THIRDS - h) + p
    } else {
        p
    }
}

/// `(hue, saturation, lightness, a)` to RGB.
pub fn hsl_to_rgb(hsl: Vector) -> Vector {
    const ONE_THIRD: f32 = 1.0 / 3.0;
    let Vector { x: h, y: s, z: l, w: a } = hsl;
    if scalar::near_equal(s, 0.0, scalar::EPSILON) {
        return Vector::new(l, l, l, a);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { (l + s) - l * s };
    let p = 2.0 * l - q;
    Vector::new(
        hue_to_channel(p, q, h + ONE_THIRD),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - ONE_THIRD),
        a,
    )
}

/// RGB to `(hue, saturation, value, a)`.
///
/// Achromatic colors get hue 0; black also gets saturation 0.
pub fn rgb_to_hsv(c: Vector) -> Vector {
    let min = c.x.min(c.y).min(c.z);
    let v = c.x.max(c.y).max(c.z);
    let d = v - min;
    let s = if scalar::near_equal(v, 0.0, scalar::EPSILON) {
        0.0
    } else {
        d / v
    };
    if d < scalar::EPSILON {
        return Vector::new(0.0, s, v, c.w);
    }

    let mut h = hue_sixths(c, v, d);
    if c.x == v && c.y < c.z {
        h += 6.0;
    }
    Vector::new(h / 6.0, s, v, c.w)
}

/// `(hue, saturation, value, a)` to RGB, using the six-sector split of the hue
/// circle. The value is read from the `z` lane.
///
/// Hues outside `[0, 1)` wrap around the circle, so `-0.25` and `0.75` agree.
pub fn hsv_to_rgb(hsv: Vector) -> Vector {
    let Vector { x: h, y: s, z: v, w: a } = hsv;
    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i.rem_euclid(6.0) as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Vector::new(r, g, b, a)
}

/// RGB to Rec. 601 YUV.
#[inline]
pub fn rgb_to_yuv(c: Vector) -> Vector {
    transform_rgb(c, &RGB_TO_YUV)
}

/// Rec. 601 YUV to RGB.
#[inline]
pub fn yuv_to_rgb(yuv: Vector) -> Vector {
    transform_rgb(yuv, &YUV_TO_RGB)
}

/// RGB to Rec. 709 (high definition) YUV.
#[inline]
pub fn rgb_to_yuv_hd(c: Vector) -> Vector {
    transform_rgb(c, &RGB_TO_YUV_HD)
}

/// Rec. 709 (high definition) YUV to RGB.
#[inline]
pub fn yuv_to_rgb_hd(yuv: Vector) -> Vector {
    transform_rgb(yuv, &YUV_HD_TO_RGB)
}

/// CIE RGB to CIE XYZ.
pub fn rgb_to_xyz(c: Vector) -> Vector {
    let xyz = transform_rgb(c, &RGB_TO_XYZ);
    map_rgb(xyz, |v| v / XYZ_SCALE)
}

/// CIE XYZ to CIE RGB.
pub fn xyz_to_rgb(xyz: Vector) -> Vector {
    transform_rgb(map_rgb(xyz, |v| v * XYZ_SCALE), &XYZ_TO_RGB)
}

/// CIE XYZ to gamma-encoded sRGB.
pub fn xyz_to_srgb(xyz: Vector) -> Vector {
    map_rgb(transform_rgb(xyz, &XYZ_TO_SRGB), linear_to_srgb)
}

/// Gamma-encoded sRGB to CIE XYZ.
pub fn srgb_to_xyz(srgb: Vector) -> Vector {
    transform_rgb(map_rgb(srgb, srgb_to_linear), &SRGB_TO_XYZ)
}

/// Linear RGB to gamma-encoded sRGB. Channels are saturated to `[0, 1]` first.
pub fn rgb_to_srgb(c: Vector) -> Vector {
    map_rgb(c, |v| linear_to_srgb(v.clamp(0.0, 1.0)))
}

/// Gamma-encoded sRGB to linear RGB. Channels are saturated to `[0, 1]` first.
pub fn srgb_to_rgb(srgb: Vector) -> Vector {
    map_rgb(srgb, |v| srgb_to_linear(v.clamp(0.0, 1.0)))
}
