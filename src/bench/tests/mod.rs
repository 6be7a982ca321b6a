//! Benchmark 模块测试
