mod helpers;
mod pricing;
