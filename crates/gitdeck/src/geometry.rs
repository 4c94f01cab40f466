use std::str::FromStr;

use eframe::egui::{Pos2, pos2};

use crate::error::{Found, PathError};

/// Samples taken along each cubic curve when flattening.
const CUBIC_STEPS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Pos2),
    Cubic(Pos2, Pos2, Pos2),
}

/// A diagram path in absolute SVG `M`/`L`/`C` syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub start: Pos2,
    pub segments: Vec<Segment>,
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(d: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(d);
        let mut cursor = Cursor { tokens, pos: 0 };

        match cursor.next() {
            Some(t) if t == "M" => {}
            Some(t) => return Err(PathError::MissingMove(t)),
            None => return Err(PathError::MissingMove(String::new())),
        }
        let start = cursor.point('M')?;

        let mut segments = Vec::new();
        // A bare coordinate pair after M continues as a line.
        let mut command = 'L';
        while let Some(token) = cursor.peek() {
            if let Some(c) = command_char(token) {
                cursor.next();
                command = match c {
                    'L' | 'C' => c,
                    'M' => {
                        return Err(PathError::UnknownCommand(
                            "M (subpaths are not supported)".to_string(),
                        ));
                    }
                    other => return Err(PathError::UnknownCommand(other.to_string())),
                };
            }
            match command {
                'L' => segments.push(Segment::Line(cursor.point('L')?)),
                _ => {
                    let c1 = cursor.point('C')?;
                    let c2 = cursor.point('C')?;
                    let end = cursor.point('C')?;
                    segments.push(Segment::Cubic(c1, c2, end));
                }
            }
        }

        Ok(Self { start, segments })
    }
}

impl Path {
    pub fn end(&self) -> Pos2 {
        match self.segments.last() {
            Some(Segment::Line(p)) | Some(Segment::Cubic(_, _, p)) => *p,
            None => self.start,
        }
    }

    /// Polyline approximation, curves sampled uniformly in their parameter.
    pub fn flatten(&self) -> Vec<Pos2> {
        let mut points = vec![self.start];
        let mut from = self.start;
        for segment in &self.segments {
            match *segment {
                Segment::Line(to) => {
                    points.push(to);
                    from = to;
                }
                Segment::Cubic(c1, c2, to) => {
                    for i in 1..=CUBIC_STEPS {
                        let t = i as f32 / CUBIC_STEPS as f32;
                        points.push(cubic_point(from, c1, c2, to, t));
                    }
                    from = to;
                }
            }
        }
        points
    }
}

fn cubic_point(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    pos2(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

fn command_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Split path data into command letters and number strings.
fn tokenize(d: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in d.chars() {
        if ch.is_whitespace() || ch == ',' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

struct Cursor {
    tokens: Vec<String>,
    pos: usize,
}

impl Cursor {
    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn next(&mut self) -> Option<String> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn number(&mut self, command: char) -> Result<f32, PathError> {
        match self.next() {
            None => Err(PathError::ExpectedNumber {
                command,
                found: Found::End,
            }),
            Some(t) => t.parse::<f32>().map_err(|_| PathError::ExpectedNumber {
                command,
                found: Found::Token(t),
            }),
        }
    }

    fn point(&mut self, command: char) -> Result<Pos2, PathError> {
        let x = self.number(command)?;
        let y = self.number(command)?;
        Ok(pos2(x, y))
    }
}

/// Compute the total length of a polyline.
pub fn polyline_length(points: &[Pos2]) -> f32 {
    points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

/// Find the point at a given distance along a polyline.
pub fn point_at_distance(points: &[Pos2], distance: f32) -> Pos2 {
    let mut remaining = distance.max(0.0);
    for w in points.windows(2) {
        let seg_len = (w[1] - w[0]).length();
        if remaining <= seg_len {
            let t = remaining / seg_len.max(0.001);
            return w[0] + (w[1] - w[0]) * t;
        }
        remaining -= seg_len;
    }
    points.last().copied().unwrap_or(Pos2::ZERO)
}

/// The leading `progress` fraction of a polyline, by arc length.
pub fn trim(points: &[Pos2], progress: f32) -> Vec<Pos2> {
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 || points.len() < 2 {
        return points.to_vec();
    }
    let target = polyline_length(points) * progress;
    let mut out = vec![points[0]];
    let mut walked = 0.0;
    for w in points.windows(2) {
        let seg_len = (w[1] - w[0]).length();
        if walked + seg_len >= target {
            let t = (target - walked) / seg_len.max(0.001);
            out.push(w[0] + (w[1] - w[0]) * t);
            return out;
        }
        walked += seg_len;
        out.push(w[1]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(d: &str) -> Result<Path, PathError> {
        d.parse()
    }

    #[test]
    fn parses_lines_and_curves() {
        let path = parse("M 200 180 C 250 180, 280 110, 330 110 L 500 110").unwrap();
        assert_eq!(path.start, pos2(200.0, 180.0));
        assert_eq!(
            path.segments,
            vec![
                Segment::Cubic(pos2(250.0, 180.0), pos2(280.0, 110.0), pos2(330.0, 110.0)),
                Segment::Line(pos2(500.0, 110.0)),
            ]
        );
        assert_eq!(path.end(), pos2(500.0, 110.0));
    }

    #[test]
    fn implicit_repeats_continue_the_last_command() {
        let path = parse("M0 0 10 0 L 10 10 0 10").unwrap();
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.end(), pos2(0.0, 10.0));
    }

    #[test]
    fn rejects_malformed_data() {
        assert_eq!(parse(""), Err(PathError::MissingMove(String::new())));
        assert_eq!(
            parse("L 1 2"),
            Err(PathError::MissingMove("L".to_string()))
        );
        assert_eq!(
            parse("M 1 2 Q 3 4 5 6"),
            Err(PathError::UnknownCommand("Q".to_string()))
        );
        assert_eq!(
            parse("M 1 2 C 3 4 5"),
            Err(PathError::ExpectedNumber {
                command: 'C',
                found: Found::End
            })
        );
        assert_eq!(
            parse("M 1 x"),
            Err(PathError::ExpectedNumber {
                command: 'M',
                found: Found::Token("x".to_string())
            })
        );
    }

    #[test]
    fn flatten_keeps_endpoints_and_samples_curves() {
        let path = parse("M 100 200 C 150 200, 200 80, 300 80 L 500 80").unwrap();
        let points = path.flatten();
        assert_eq!(points.first(), Some(&pos2(100.0, 200.0)));
        assert_eq!(points.last(), Some(&pos2(500.0, 80.0)));
        assert_eq!(points.len(), 1 + CUBIC_STEPS + 1);
        let curve_end = points[CUBIC_STEPS];
        assert!((curve_end - pos2(300.0, 80.0)).length() < 1e-3);
    }

    #[test]
    fn lengths_and_trimming() {
        let points = [pos2(0.0, 0.0), pos2(30.0, 0.0), pos2(30.0, 40.0)];
        assert_eq!(polyline_length(&points), 70.0);
        assert_eq!(point_at_distance(&points, 50.0), pos2(30.0, 20.0));
        assert_eq!(point_at_distance(&points, 500.0), pos2(30.0, 40.0));

        let half = trim(&points, 0.5);
        assert_eq!(half.last(), Some(&pos2(30.0, 5.0)));
        assert!((polyline_length(&half) - 35.0).abs() < 1e-4);
        assert_eq!(trim(&points, 0.0), vec![pos2(0.0, 0.0), pos2(0.0, 0.0)]);
        assert_eq!(trim(&points, 1.0).len(), 3);
    }
}
