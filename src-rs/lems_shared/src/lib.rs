#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Shared utilities for the LEMS crates

pub mod error;
