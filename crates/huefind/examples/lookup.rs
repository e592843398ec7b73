use huefind::error::CatalogError;
use huefind::opt::Options;
use huefind::{Catalog, ColorInput, ColorModel};

const QUERIES: [(ColorModel, &str); 6] = [
    (ColorModel::Hex, "#ff0000"),
    (ColorModel::Hex, "ffca00"),
    (ColorModel::Rgb, "49, 120, 234"),
    (ColorModel::Hsl, "160 0.5 0.4"),
    (ColorModel::Lab, "70 -20 -30"),
    (ColorModel::Rgb, "256 0 0"),
];

fn main() -> Result<(), CatalogError> {
    let catalog = Catalog::load(&Options::from_environment())?;
    println!("catalog with {} colors\n", catalog.len());

    for (model, text) in QUERIES {
        let result = ColorInput::parse(model, text)
            .map(|input| catalog.get(&input));

        match result {
            Ok(Some(info)) => println!("{:>4} {:<14} {}", model, text, info),
            Ok(None) => println!("{:>4} {:<14} is not a valid color", model, text),
            Err(err) => println!("{:>4} {:<14} {}", model, text, err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use huefind::error::CatalogError;

    #[test]
    fn run_main() -> Result<(), CatalogError> {
        super::main()
    }
}
