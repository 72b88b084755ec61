use super::*;

mod export;
mod registry;

pub const GADGETS_MD: &str = "**[Carberry, J.](https://orcid.org/0000-0002-1825-0097)**, *Dense \
                              Gadgets*, Handbook of Gadgets, Hopper, G., \
                              [Link](https://example.com/gadgets), 2023";

pub const WIDGETS_MD: &str = "**[Carberry, J.](https://orcid.org/0000-0002-1825-0097)**; \
                              **[Lovelace, A.](mailto:ada@example.org)**, *Sparse Widgets \
                              Revisited*, Journal of Widgetry, doi: \
                              [10.1234/widgets.2021](https://doi.org/10.1234/widgets.2021), 2021";

pub const SPROCKETS: &str = "*Notes on Sprockets*, 2021";
