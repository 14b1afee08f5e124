//! Encapsulated PostScript output

use std::io::{self, Write};

use crate::layout::{Color, Drawing, Primitive};

/// Procedures used by the drawing commands
const PROLOG: &str = "\
/cellrect { % x y w h
  4 dict begin
  /h exch def /w exch def
  newpath moveto w 0 rlineto 0 h rlineto w neg 0 rlineto closepath fill
  end
} bind def
/seg { % x1 y1 x2 y2 width
  setlinewidth newpath 4 2 roll moveto lineto stroke
} bind def
/glyph { % (text) x y size
  /Helvetica findfont exch scalefont setfont moveto show
} bind def
2 setlinecap";

/// Writes primitives as EPS, in the order given
pub struct EpsWriter<W: Write> {
    out: W,
    color: Option<Color>,
}

impl<W: Write> EpsWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: None }
    }

    /// Write a complete document: header, prolog, primitives and trailer
    pub fn write_document(&mut self, drawing: &Drawing) -> io::Result<()> {
        let bounds = drawing.bounds;
        writeln!(self.out, "%!PS-Adobe-3.0 EPSF-3.0")?;
        writeln!(self.out, "%%Creator: maze-to-eps")?;
        writeln!(
            self.out,
            "%%BoundingBox: {} {} {} {}",
            bounds.min.x.floor() as i64,
            bounds.min.y.floor() as i64,
            bounds.max.x.ceil() as i64,
            bounds.max.y.ceil() as i64
        )?;
        writeln!(
            self.out,
            "%%HiResBoundingBox: {} {} {} {}",
            num(bounds.min.x),
            num(bounds.min.y),
            num(bounds.max.x),
            num(bounds.max.y)
        )?;
        writeln!(self.out, "%%Pages: 0")?;
        writeln!(self.out, "%%EndComments")?;
        writeln!(self.out, "{PROLOG}")?;
        writeln!(self.out, "%%EndProlog")?;

        for primitive in &drawing.primitives {
            self.write_primitive(primitive)?;
        }

        writeln!(self.out, "showpage")?;
        writeln!(self.out, "%%EOF")?;
        self.out.flush()
    }

    fn write_primitive(&mut self, primitive: &Primitive) -> io::Result<()> {
        match primitive {
            Primitive::FilledRect {
                corner,
                width,
                height,
                color,
            } => {
                self.set_color(*color)?;
                writeln!(
                    self.out,
                    "{} {} {} {} cellrect",
                    num(corner.x),
                    num(corner.y),
                    num(*width),
                    num(*height)
                )
            }
            Primitive::StrokedLine { from, to, width } => {
                self.set_color(Color::BLACK)?;
                writeln!(
                    self.out,
                    "{} {} {} {} {} seg",
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y),
                    num(*width)
                )
            }
            Primitive::Glyph {
                text,
                anchor,
                color,
                font_size,
            } => {
                self.set_color(*color)?;
                writeln!(
                    self.out,
                    "({}) {} {} {} glyph",
                    escape(text),
                    num(anchor.x),
                    num(anchor.y),
                    num(*font_size)
                )
            }
        }
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        if self.color == Some(color) {
            return Ok(());
        }
        self.color = Some(color);
        writeln!(
            self.out,
            "{} {} {} setrgbcolor",
            num(color.r),
            num(color.g),
            num(color.b)
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Round to four decimals so float noise stays out of the document
fn num(value: f64) -> f64 {
    // Adding zero turns -0 into 0
    (value * 10_000.0).round() / 10_000.0 + 0.0
}

/// Escape a PostScript string literal
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use crate::eps::{escape, num, EpsWriter};
    use crate::layout::{Bounds, Color, Drawing, Point, Primitive};

    fn write(drawing: &Drawing) -> String {
        let mut writer = EpsWriter::new(Vec::new());
        writer.write_document(drawing).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn header_and_trailer() {
        let drawing = Drawing {
            bounds: Bounds {
                min: Point::new(-1.0, -1.0),
                max: Point::new(41.0, 21.0),
            },
            primitives: vec![],
        };
        let eps = write(&drawing);
        let lines: Vec<&str> = eps.lines().collect();
        assert_eq!(lines[0], "%!PS-Adobe-3.0 EPSF-3.0");
        assert!(lines.contains(&"%%BoundingBox: -1 -1 41 21"));
        assert!(lines.contains(&"%%HiResBoundingBox: -1 -1 41 21"));
        assert!(eps.contains("/cellrect {"));
        assert_eq!(lines[lines.len() - 2], "showpage");
        assert_eq!(lines[lines.len() - 1], "%%EOF");
    }

    #[test]
    fn bounding_box_rounds_outward() {
        let drawing = Drawing {
            bounds: Bounds {
                min: Point::new(-0.5, -0.5),
                max: Point::new(20.5, 10.5),
            },
            primitives: vec![],
        };
        let eps = write(&drawing);
        assert!(eps.contains("%%BoundingBox: -1 -1 21 11\n"));
        assert!(eps.contains("%%HiResBoundingBox: -0.5 -0.5 20.5 10.5\n"));
    }

    #[test]
    fn primitives_keep_order_and_share_colors() {
        let drawing = Drawing {
            bounds: Bounds {
                min: Point::new(0.0, 0.0),
                max: Point::new(20.0, 20.0),
            },
            primitives: vec![
                Primitive::FilledRect {
                    corner: Point::new(0.0, 10.0),
                    width: 10.0,
                    height: 10.0,
                    color: Color::WHITE,
                },
                Primitive::FilledRect {
                    corner: Point::new(10.0, 10.0),
                    width: 10.0,
                    height: 10.0,
                    color: Color::WHITE,
                },
                Primitive::Glyph {
                    text: "S".to_string(),
                    anchor: Point::new(3.6, 13.2),
                    color: Color::BLACK,
                    font_size: 5.0,
                },
                Primitive::StrokedLine {
                    from: Point::new(0.0, 20.0),
                    to: Point::new(10.0, 20.0),
                    width: 1.5,
                },
            ],
        };
        let eps = write(&drawing);
        let body: Vec<&str> = eps
            .lines()
            .skip_while(|line| *line != "%%EndProlog")
            .skip(1)
            .collect();
        assert_eq!(
            body,
            vec![
                "1 1 1 setrgbcolor",
                "0 10 10 10 cellrect",
                "10 10 10 10 cellrect",
                "0 0 0 setrgbcolor",
                "(S) 3.6 13.2 5 glyph",
                "0 20 10 20 1.5 seg",
                "showpage",
                "%%EOF",
            ]
        );
    }

    #[test]
    fn coordinates_drop_float_noise() {
        assert_eq!(num(0.36 * 20.0).to_string(), "7.2");
        assert_eq!(num(-0.0).to_string(), "0");
        assert_eq!(num(12.5).to_string(), "12.5");

        let drawing = Drawing {
            bounds: Bounds {
                min: Point::new(0.0, 0.0),
                max: Point::new(20.0, 20.0),
            },
            primitives: vec![Primitive::Glyph {
                text: "5".to_string(),
                anchor: Point::new(7.199999999999999, 6.3999999999999995),
                color: Color::BLACK,
                font_size: 10.0,
            }],
        };
        assert!(write(&drawing).contains("(5) 7.2 6.4 10 glyph\n"));
    }

    #[test]
    fn escape_string_literals() {
        assert_eq!(escape("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(escape("12"), "12");
    }
}
