//! Generate static files

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Espresso;

/// Generate the static site
pub fn run(app: &Espresso) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(app);
    let store = loader.load()?;

    let generator = Generator::new(app)?;
    generator.generate(&store)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} documents in {:.2}s",
        store.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
