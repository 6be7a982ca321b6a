//! Fibonacci 模块测试
