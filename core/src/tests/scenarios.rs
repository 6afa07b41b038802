use crate::prelude::*;

/// Fills the main diagonal and the anti-diagonal of a 10x10 matrix.
fn diagonals() -> Matrix2D<i32> {
    let mut m = Matrix2D::default();
    for i in 0..10 {
        m.at(i).at(i).write(i as i32);
    }
    for i in 0..10 {
        m.at(i).at(9 - i).write((9 - i) as i32);
    }
    m
}

#[test]
fn test_diagonals() {
    let m = diagonals();

    // Twenty writes, but the two writes of zero (at [0, 0] and [9, 0]) store
    // nothing.
    assert_eq!(18, m.len());
    assert_eq!(&1, m.view(1).at(1).read());
    assert_eq!(&9, m.view(0).at(9).read());
    assert_eq!(&0, m.view(0).at(0).read());
    assert_eq!(&0, m.view(9).at(0).read());
    assert_eq!(&0, m.view(1).at(2).read());
    assert_eq!(m.len(), m.iter().count());

    let first_row: Vec<_> = m.iter().take_while(|&(i, _, _)| i == 0).collect();
    assert_eq!(vec![(0, 9, &9)], first_row);
    let last_row: Vec<_> = m.iter().filter(|&(i, _, _)| i == 9).collect();
    assert_eq!(vec![(9, 9, &9)], last_row);

    let copy = m.clone();
    assert_eq!(m.iter().collect::<Vec<_>>(), copy.iter().collect::<Vec<_>>());
}

#[test]
fn test_default_write_on_empty() {
    let mut m = Matrix2D::new(0);
    m.at(0).at(0).write(0);
    assert_eq!(0, m.len());
    assert_eq!(None, m.iter().next());
}

#[test]
fn test_checkerboard() {
    let mut m = Matrix2D::new(0);
    let mut steps = 0;
    for i in (0..10).step_by(2) {
        for j in (0..10).step_by(2) {
            m.at(i + 1).at(j).write(8);
            m.at(i).at(j + 1).write(8);
            steps += 1;
        }
    }
    assert_eq!(25, steps);
    assert_eq!(50, m.len());
    for i in 0..10 {
        for j in 0..10 {
            let expected = if (i + j) % 2 == 1 { 8 } else { 0 };
            assert_eq!(&expected, m.view(i).at(j).read(), "at [{}, {}]", i, j);
        }
    }
}

#[test]
fn test_clear() {
    let mut m = diagonals();
    m.clear();
    assert_eq!(0, m.len());
    assert_eq!(0, m.iter().count());
    assert_eq!(&0, m.view(1).at(1).read());
}
