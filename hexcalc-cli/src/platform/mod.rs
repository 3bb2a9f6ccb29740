//! 宿主平台适配：标准输入输出设备与终端输出

mod cli;
mod stdio;

pub use cli::print_error_with_line;
pub use stdio::StdioDevice;
