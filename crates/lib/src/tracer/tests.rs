use super::{Label, LoopTracer, Trace, TraceError, Turns};
use crate::grid::{Grid, GridBuf};
use crate::input;
use crate::pipe::{Pipe, Side};
use crate::pos::{Dir, Pos};

const COMPLEX: &[u8] = b"\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

const SQUARE: &[u8] = b"\
.....
.S-7.
.|.|.
.L-J.
.....
";

const SQUEEZE: &[u8] = b"\
..........
.S------7.
.|F----7|.
.||OOOO||.
.||OOOO||.
.|L-7F-J|.
.|II||II|.
.L--JL--J.
..........
";

const LARGER: &[u8] = b"\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

const JUNK: &[u8] = b"\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

fn tracer(data: &[u8]) -> LoopTracer<GridBuf<u8>> {
    let grid = input::parse(data).unwrap();
    LoopTracer::new(grid).unwrap()
}

fn trace(data: &[u8]) -> Trace {
    tracer(data).trace().unwrap()
}

#[test]
fn test_complex_loop() {
    let trace = trace(COMPLEX);
    assert_eq!(trace.loop_len(), 16);
    assert_eq!(trace.farthest().unwrap(), 8);
    assert_eq!(trace.enclosed().unwrap(), 1);
}

#[test]
fn test_square_loop() {
    let trace = trace(SQUARE);
    assert_eq!(trace.farthest().unwrap(), 4);
    assert_eq!(trace.enclosed().unwrap(), 1);
    assert_eq!(trace.labels().get(2, 2), &Label::Side(trace.inside().unwrap()));
}

#[test]
fn test_squeezed_between_pipes() {
    let trace = trace(SQUEEZE);
    assert_eq!(trace.enclosed().unwrap(), 4);

    // Cells marked `O` are outside even though no gap leads there.
    let outside = Label::Side(trace.inside().unwrap().flip());
    assert_eq!(trace.labels().get(3, 3), &outside);
    assert_eq!(trace.labels().get(4, 6), &outside);
}

#[test]
fn test_larger_loops() {
    assert_eq!(trace(LARGER).enclosed().unwrap(), 8);
    assert_eq!(trace(JUNK).enclosed().unwrap(), 10);
}

#[test]
fn test_loop_len_matches_loop_labels() {
    for data in [COMPLEX, SQUARE, SQUEEZE, LARGER, JUNK] {
        let trace = trace(data);
        assert_eq!(trace.loop_len(), trace.count(Label::Loop));
    }
}

#[test]
fn test_partition() {
    for data in [COMPLEX, SQUARE, SQUEEZE, LARGER, JUNK] {
        let tracer = tracer(data);
        let trace = tracer.trace().unwrap();

        assert_eq!(trace.count(Label::Unset), 0);

        let total = trace.enclosed().unwrap() + trace.loop_len() + trace.exterior().unwrap();
        assert_eq!(total, tracer.grid().cells_len());
    }
}

#[test]
fn test_either_exit_gives_same_answer() {
    for data in [COMPLEX, SQUARE, SQUEEZE, LARGER, JUNK] {
        let tracer = tracer(data);
        let [a, b] = tracer.start_exits().unwrap();

        let there = tracer.trace_from(a).unwrap();
        let back = tracer.trace_from(b).unwrap();

        assert_eq!(there.loop_len(), back.loop_len());
        assert_eq!(there.enclosed().unwrap(), back.enclosed().unwrap());
        assert_eq!(there.inside().unwrap(), back.inside().unwrap().flip());
        assert_eq!(there.turns().left, back.turns().right);
        assert_eq!(there.turns().right, back.turns().left);
    }
}

#[test]
fn test_tracing_twice() {
    let tracer = tracer(LARGER);
    let a = tracer.trace().unwrap();
    let b = tracer.trace().unwrap();

    assert_eq!(a.labels(), b.labels());
    assert_eq!(a.turns(), b.turns());
    assert_eq!(a.enclosed().unwrap(), b.enclosed().unwrap());
}

#[test]
fn test_nothing_enclosed() {
    let t = trace(b"S-7\nL-J\n");
    assert_eq!(t.farthest().unwrap(), 3);
    assert_eq!(t.enclosed().unwrap(), 0);
    assert_eq!(t.exterior().unwrap(), 0);

    let t = trace(b"S7\nLJ\n");
    assert_eq!(t.loop_len(), 4);
    assert_eq!(t.enclosed().unwrap(), 0);

    let t = trace(b".....\n.S-7.\n.L-J.\n.....\n");
    assert_eq!(t.enclosed().unwrap(), 0);
    assert_eq!(t.exterior().unwrap(), 14);
}

#[test]
fn test_turn_tally() {
    let trace = trace(SQUARE);
    let Turns { left, right } = trace.turns();
    assert_eq!(left.abs_diff(right), 4);
    assert_eq!(left + right, 4);
}

#[test]
fn test_start_resolution() {
    let t = tracer(COMPLEX);
    assert_eq!(t.start(), Pos::new(2, 0));
    assert_eq!(t.start_exits().unwrap(), [Dir::Down, Dir::Right]);
    assert_eq!(t.start_pipe().unwrap(), Pipe::DownRight);

    let t = tracer(b"-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF\n");
    assert_eq!(t.start_pipe().unwrap(), Pipe::DownRight);
    assert_eq!(t.trace().unwrap().farthest().unwrap(), 4);

    let t = tracer(b"F-7\n|.S\nL-J\n");
    assert_eq!(t.start_pipe().unwrap(), Pipe::Vertical);
}

#[test]
fn test_filler_outside_loop() {
    let trace = trace(b"#####\n#S-7#\n#|x|#\n#L-J#\n#####\n");
    assert_eq!(trace.enclosed().unwrap(), 1);
    assert_eq!(trace.exterior().unwrap(), 16);
}

#[test]
fn test_missing_and_duplicate_start() {
    let grid = input::parse(b"F-7\nL-J\n").unwrap();
    assert!(matches!(LoopTracer::new(grid), Err(TraceError::MissingStart)));

    let grid = input::parse(b"S-7\nL-S\n").unwrap();
    assert!(matches!(
        LoopTracer::new(grid),
        Err(TraceError::DuplicateStart {
            first: Pos { row: 0, col: 0 },
            second: Pos { row: 1, col: 2 },
        })
    ));
}

#[test]
fn test_start_connections() {
    let t = tracer(b"...\n.S-\n...\n");
    assert_eq!(
        t.trace().unwrap_err(),
        TraceError::StartConnections {
            pos: Pos::new(1, 1),
            count: 1
        }
    );

    let t = tracer(b".|.\n-S-\n.|.\n");
    assert!(matches!(
        t.start_pipe(),
        Err(TraceError::StartConnections { count: 4, .. })
    ));
}

#[test]
fn test_not_an_exit() {
    let t = tracer(SQUARE);
    assert!(matches!(
        t.trace_from(Dir::Up),
        Err(TraceError::NotAnExit {
            dir: Dir::Up,
            pipe: Pipe::DownRight
        })
    ));
}

#[test]
fn test_broken_loops() {
    // The loop runs into a dead end.
    let t = tracer(b"S-7\n|.|\nL-.\n");
    assert!(matches!(
        t.trace(),
        Err(TraceError::UnknownPipe { byte: b'.', .. })
    ));

    // Coming up from `J` the pipe above it doesn't connect.
    let t = tracer(b"S-7\n|.-\nL-J\n");
    assert!(matches!(
        t.trace(),
        Err(TraceError::Disconnected {
            pipe: Pipe::Horizontal,
            travel: Dir::Up,
            ..
        })
    ));

    // The pipe leads off the edge of the grid.
    let t = tracer(b"S-7\n|.|\n|.|\n");
    assert!(matches!(
        t.trace(),
        Err(TraceError::OutOfBounds { dir: Dir::Down, .. })
    ));
}

#[test]
fn test_errors_on_odd_and_tied_loops() {
    let trace = Trace {
        len: 7,
        turns: Turns { left: 2, right: 2 },
        labels: GridBuf::new(1, vec![Label::Loop; 7]).unwrap(),
    };

    assert_eq!(trace.farthest(), Err(TraceError::OddLength { len: 7 }));
    assert_eq!(trace.inside(), Err(TraceError::TiedTurns { turns: 2 }));
    assert!(trace.enclosed().is_err());
    assert_eq!(trace.inside().map(Side::flip), Err(TraceError::TiedTurns { turns: 2 }));
}
