/// Outcome of placing an order against a product's stock.
///
/// `Display` renders the plain-text messages clients already parse, so the
/// wording must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderPlacement {
    Placed {
        quantity: i32,
        product_name: String,
        remaining_stock: i32,
    },
    ProductNotFound,
    InsufficientStock {
        available: i32,
    },
}

impl OrderPlacement {
    pub fn is_placed(&self) -> bool {
        matches!(self, OrderPlacement::Placed { .. })
    }
}

impl std::fmt::Display for OrderPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderPlacement::Placed {
                quantity,
                product_name,
                remaining_stock,
            } => write!(
                f,
                "Success: Ordered {} of {}. Remaining Stock: {}",
                quantity, product_name, remaining_stock
            ),
            OrderPlacement::ProductNotFound => write!(f, "Error: Product not found."),
            OrderPlacement::InsufficientStock { available } => {
                write!(f, "Error: Insufficient stock. Only {} available.", available)
            }
        }
    }
}
