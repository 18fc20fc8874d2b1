// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>

// -----------------------------------------------------------------------------------
// Vector utilities
// -----------------------------------------------------------------------------------

use num::Float;

// Sum all elements in a vector
pub fn vecsum<T: Float>(vec: &[T]) -> T {
    vec.iter().fold(T::zero(), |acc, el| acc + *el)
}

// Cumulative sum starting at `start`: res = [start, start + vec[0], start + vec[0] + vec[1], ...]
// res.len() == vec.len() + 1
pub fn cumsum<T: Float>(start: T, vec: &[T]) -> Vec<T> {
    std::iter::once(start)
        .chain(vec.iter().scan(start, |acc, el| {
            *acc = *acc + *el;
            Some(*acc)
        }))
        .collect()
}

// Multiply vector by scalar
pub fn veckmul<T: Float>(vec1: &[T], k: T) -> Vec<T> {
    vec1.iter().map(|el| *el * k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vecops_vecsum() {
        assert_eq!(9.0, vecsum(&[2.0, 3.0, 4.0]));
        assert_eq!(0.0, vecsum::<f64>(&[]));
    }

    #[test]
    fn vecops_cumsum() {
        assert_eq!(vec![1.0, 3.0, 6.0, 10.0], cumsum(1.0, &[2.0, 3.0, 4.0]));
        assert_eq!(vec![5.0], cumsum(5.0, &[]));
    }

    #[test]
    fn vecops_veckmul() {
        assert_eq!(vec![2.0, 4.0, 6.0], veckmul(&[1.0, 2.0, 3.0], 2.0));
    }
}
