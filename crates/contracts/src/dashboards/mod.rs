pub mod d410_sales_statistics;
