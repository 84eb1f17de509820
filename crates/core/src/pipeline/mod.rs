pub mod apply_filter_use_case;
