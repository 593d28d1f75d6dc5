use keyboard_inset::{Bounds, Geometry, solve};

fn main() {
    // A 300px keyboard on an 800px webview leaves everything below y=500 covered.
    let keyboard_top = 800.0 - 300.0;

    // A field sitting just under the keyboard's top edge gets lifted clear of it.
    let field = Bounds::new(500.0, 550.0);
    let offset = solve(field, 0.0, keyboard_top, 8.0, 0.0);
    println!("field: offset={offset}");

    // Solving again with the outstanding offset is a no-op.
    println!("again: offset={}", solve(field, 0.0, keyboard_top, 8.0, offset));

    // A textarea taller than the space left above the keyboard keeps its top in view instead.
    let tall = Geometry {
        element: Bounds::new(100.0, 900.0),
        container_top: 100.0,
        keyboard_top,
        margin: 8.0,
        prior_offset: 0.0,
    };
    println!("tall: {:?}", tall.solve());
}
