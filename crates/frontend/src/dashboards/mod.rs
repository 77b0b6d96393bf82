pub mod d410_sales_statistics;

pub use d410_sales_statistics::ui::SalesStatisticsDashboard;
