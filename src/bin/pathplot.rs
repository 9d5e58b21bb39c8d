use pathplot::plot::parse_cli;
use pathplot::{PlotOptions, PointPath};

fn main() {
    let (txtin, svgout, label_every, title) = parse_cli();
    println!(
        "read coordinates from {} and plot to {}",
        txtin.to_str().unwrap(),
        svgout.to_str().unwrap()
    );
    let pointpath = match PointPath::from_file(&txtin) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("pathplot: could not load {}: {}", txtin.display(), e);
            std::process::exit(1);
        }
    };
    println!("loaded {} point(s)", pointpath.len());
    let opts = PlotOptions { title, label_every };
    if let Err(e) = pointpath.plot(&svgout, &opts) {
        eprintln!("pathplot: could not plot to {}: {}", svgout.display(), e);
        std::process::exit(1);
    }
}
