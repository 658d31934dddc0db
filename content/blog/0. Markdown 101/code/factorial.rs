// start-snippet{funcA}
fn factorial(x: u64) -> u64 {
    if x <= 1 {
        1
    } else {
        x * factorial(x - 1)
    }
}
// end-snippet{funcA}

fn display() {
    let x = 5;
    // start-snippet{invokeA}
    let xfact = factorial(x);
    // end-snippet{invokeA}
    println!("{} factorial is {}", x, xfact);
}
